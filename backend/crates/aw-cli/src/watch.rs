//! Simulated ad watch followed by a single credit call.

use crate::{AuthUser, CliClientResult, Client, CreditAck, RewardsPolicy};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;
use tokio::sync::watch;

const DEFAULT_WATCH_SECS: u64 = 10;
const DEFAULT_POINTS_PER_VIEW: i64 = 10;
const VERIFIED_MODE: &str = "verified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchPolicy {
    pub duration: Duration,
    pub points: i64,
    /// Fetch a watch ticket before the timer and present it with the credit
    pub verified: bool,
}

impl Default for WatchPolicy {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(DEFAULT_WATCH_SECS),
            points: DEFAULT_POINTS_PER_VIEW,
            verified: false,
        }
    }
}

impl From<&RewardsPolicy> for WatchPolicy {
    fn from(policy: &RewardsPolicy) -> Self {
        Self {
            duration: Duration::from_secs(policy.watch_secs),
            points: policy.points_per_view,
            verified: policy.credit_mode == VERIFIED_MODE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Watching,
    Credited { points: i64 },
    Errored { reason: String },
}

impl WatchState {
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Watching => "Watching...".to_string(),
            Self::Credited { points } => format!("You earned {points} points!"),
            Self::Errored { reason } => format!("Error: {reason}"),
        }
    }

    pub fn is_watching(&self) -> bool {
        matches!(self, Self::Watching)
    }
}

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("A watch is already in progress {location}")]
    AlreadyWatching { location: ErrorLocation },
}

/// Server calls the flow makes
#[async_trait]
pub trait CreditBackend: Send + Sync {
    /// Obtain a watch ticket id (verified mode only)
    async fn start_ticket(&self, user: &AuthUser) -> CliClientResult<String>;

    async fn credit(
        &self,
        user: &AuthUser,
        points: i64,
        ticket: Option<&str>,
    ) -> CliClientResult<CreditAck>;
}

#[async_trait]
impl CreditBackend for Client {
    async fn start_ticket(&self, user: &AuthUser) -> CliClientResult<String> {
        Ok(self.start_watch(&user.token).await?.ticket)
    }

    async fn credit(
        &self,
        user: &AuthUser,
        points: i64,
        ticket: Option<&str>,
    ) -> CliClientResult<CreditAck> {
        let token = ticket.map(|_| user.token.as_str());
        self.add_points(&user.uid, points, ticket, token).await
    }
}

pub struct WatchFlow<B> {
    backend: B,
    policy: WatchPolicy,
    state: Arc<watch::Sender<WatchState>>,
}

impl<B: CreditBackend> WatchFlow<B> {
    pub fn new(backend: B, policy: WatchPolicy) -> Self {
        Self {
            backend,
            policy,
            state: Arc::new(watch::Sender::new(WatchState::Idle)),
        }
    }

    pub fn state(&self) -> WatchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WatchState> {
        self.state.subscribe()
    }

    pub fn policy(&self) -> WatchPolicy {
        self.policy
    }

    /// Run one cycle: wait out the ad, then credit once. Resolves to the
    /// resting state. Dropping the future mid-wait forfeits the credit and
    /// returns the flow to `Idle`.
    #[track_caller]
    pub fn start<'a>(
        &'a self,
        user: &'a AuthUser,
    ) -> Result<impl Future<Output = WatchState> + Send + 'a, WatchError> {
        let claimed = self.state.send_if_modified(|state| {
            if state.is_watching() {
                return false;
            }
            *state = WatchState::Watching;
            true
        });

        if !claimed {
            return Err(WatchError::AlreadyWatching {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let cycle = Cycle {
            state: &self.state,
            finished: false,
        };

        Ok(async move { cycle.run(&self.backend, self.policy, user).await })
    }
}

/// One claimed watch cycle; resets the flow to `Idle` if dropped unfinished
struct Cycle<'a> {
    state: &'a watch::Sender<WatchState>,
    finished: bool,
}

impl Cycle<'_> {
    async fn run<B: CreditBackend>(
        mut self,
        backend: &B,
        policy: WatchPolicy,
        user: &AuthUser,
    ) -> WatchState {
        let ticket = if policy.verified {
            match backend.start_ticket(user).await {
                Ok(ticket) => Some(ticket),
                Err(e) => {
                    return self.finish(WatchState::Errored {
                        reason: e.user_message(),
                    });
                }
            }
        } else {
            None
        };

        tokio::time::sleep(policy.duration).await;

        let outcome = match backend.credit(user, policy.points, ticket.as_deref()).await {
            Ok(ack) if ack.success => WatchState::Credited {
                points: policy.points,
            },
            Ok(_) => WatchState::Errored {
                reason: "unknown".to_string(),
            },
            Err(e) => WatchState::Errored {
                reason: e.user_message(),
            },
        };

        self.finish(outcome)
    }

    fn finish(&mut self, outcome: WatchState) -> WatchState {
        self.finished = true;
        self.state.send_replace(outcome.clone());
        outcome
    }
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.state.send_replace(WatchState::Idle);
        }
    }
}
