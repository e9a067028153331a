use serde::Serialize;

/// Reward policy the client needs to run a watch cycle
#[derive(Debug, Serialize)]
pub struct RewardsResponse {
    pub watch_secs: u64,
    pub points_per_view: i64,
    pub credit_mode: String,
}
