use serde::Deserialize;

/// Project identity values supplied by the deployment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub project_id: Option<String>,
    pub app_id: Option<String>,
    /// When set, identity endpoints require a matching `X-Api-Key` header
    pub api_key: Option<String>,
}
