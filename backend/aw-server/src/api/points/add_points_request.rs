use serde::Deserialize;

/// Body of `POST /api/addPoints`
///
/// Fields are optional so that absent values produce the endpoint's own
/// 400 message rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddPointsRequest {
    pub uid: Option<String>,
    pub points: Option<i64>,
    /// Watch ticket, required in verified credit mode
    pub ticket: Option<String>,
}
