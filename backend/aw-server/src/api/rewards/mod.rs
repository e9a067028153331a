pub mod rewards;
pub mod rewards_response;
