use crate::{AppState, RewardsResponse};

use axum::{Json, extract::State};

/// GET /api/v1/rewards
pub async fn get_rewards(State(state): State<AppState>) -> Json<RewardsResponse> {
    Json(RewardsResponse {
        watch_secs: state.rewards.watch_secs,
        points_per_view: state.rewards.points_per_view,
        credit_mode: state.rewards.credit_mode.as_str().to_string(),
    })
}
