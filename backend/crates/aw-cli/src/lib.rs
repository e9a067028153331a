//! aw-cli library
//!
//! HTTP client for the aw-server API plus the client-side session gate and
//! watch-and-credit flow used by the `aw` binary.

pub mod client;
pub mod gate;
pub mod identity;
pub mod watch;


pub use client::{
    AuthSession, CliClientResult, Client, ClientError, CreditAck, RewardsPolicy, WatchGrant,
};
pub use gate::{GateDecision, LedgerReader, SessionGate};
pub use identity::{AuthState, AuthSubscription, AuthUser, IdentityProvider};
pub use watch::{CreditBackend, WatchError, WatchFlow, WatchPolicy, WatchState};
