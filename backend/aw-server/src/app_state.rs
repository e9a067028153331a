use crate::Metrics;

use aw_auth::{JwtIssuer, JwtValidator};
use aw_config::{Config, RewardsConfig};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared application state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub rewards: RewardsConfig,
    /// Required `X-Api-Key` value for identity endpoints
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub cors_origins: Vec<String>,
    pub metrics: Metrics,
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config, jwt_secret: &[u8]) -> Self {
        Self {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                jwt_secret,
                config.auth.token_ttl_secs,
            )),
            rewards: config.rewards.clone(),
            api_key: config.project.api_key.clone(),
            project_id: config.project.project_id.clone(),
            cors_origins: config.server.cors_origins.clone(),
            metrics: Metrics::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
