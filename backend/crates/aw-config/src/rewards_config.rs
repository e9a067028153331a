use crate::{
    ConfigError, ConfigErrorResult, CreditMode, DEFAULT_MAX_OPEN_TICKETS, DEFAULT_POINTS_PER_VIEW,
    DEFAULT_TICKET_TTL_SECS, DEFAULT_WATCH_SECS, MAX_MAX_OPEN_TICKETS, MAX_POINTS_PER_VIEW,
    MAX_WATCH_SECS, MIN_WATCH_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    /// Simulated ad length
    pub watch_secs: u64,
    /// Points credited per completed view
    pub points_per_view: i64,
    pub credit_mode: CreditMode,
    /// How long a watch ticket stays redeemable after issue
    pub ticket_ttl_secs: u64,
    /// Unused, unexpired tickets one user may hold at once
    pub max_open_tickets: u32,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            watch_secs: DEFAULT_WATCH_SECS,
            points_per_view: DEFAULT_POINTS_PER_VIEW,
            credit_mode: CreditMode::default(),
            ticket_ttl_secs: DEFAULT_TICKET_TTL_SECS,
            max_open_tickets: DEFAULT_MAX_OPEN_TICKETS,
        }
    }
}

impl RewardsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_WATCH_SECS..=MAX_WATCH_SECS).contains(&self.watch_secs) {
            return Err(ConfigError::rewards(format!(
                "rewards.watch_secs must be {}-{}, got {}",
                MIN_WATCH_SECS, MAX_WATCH_SECS, self.watch_secs
            )));
        }

        if !(1..=MAX_POINTS_PER_VIEW).contains(&self.points_per_view) {
            return Err(ConfigError::rewards(format!(
                "rewards.points_per_view must be 1-{}, got {}",
                MAX_POINTS_PER_VIEW, self.points_per_view
            )));
        }

        if self.ticket_ttl_secs <= self.watch_secs {
            return Err(ConfigError::rewards(format!(
                "rewards.ticket_ttl_secs ({}) must exceed rewards.watch_secs ({})",
                self.ticket_ttl_secs, self.watch_secs
            )));
        }

        if !(1..=MAX_MAX_OPEN_TICKETS).contains(&self.max_open_tickets) {
            return Err(ConfigError::rewards(format!(
                "rewards.max_open_tickets must be 1-{}, got {}",
                MAX_MAX_OPEN_TICKETS, self.max_open_tickets
            )));
        }

        Ok(())
    }
}
