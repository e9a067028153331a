//! Session gate shared by the dashboard and watch surfaces.

use crate::{AuthState, AuthSubscription, AuthUser, CliClientResult, Client};

use async_trait::async_trait;

/// Reads the balance from a user's ledger record
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// `Ok(None)` when the user has no ledger record
    async fn read_points(&self, user: &AuthUser) -> CliClientResult<Option<i64>>;
}

#[async_trait]
impl LedgerReader for Client {
    async fn read_points(&self, user: &AuthUser) -> CliClientResult<Option<i64>> {
        match self.get_ledger(&user.uid, &user.token).await {
            Ok(record) => Ok(Some(record.points)),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    RedirectToLogin,
    Authenticated { user: AuthUser, points: i64 },
}

/// Turns auth-state events into routing decisions.
pub struct SessionGate<R> {
    subscription: AuthSubscription,
    reader: R,
}

impl<R: LedgerReader> SessionGate<R> {
    pub fn new(state: &AuthState, reader: R) -> Self {
        Self {
            subscription: state.subscribe(),
            reader,
        }
    }

    /// Decision for the next auth-state event. Signed-out events never touch
    /// the ledger; a failed or empty read shows a balance of 0.
    pub async fn next(&mut self) -> Option<GateDecision> {
        let user = self.subscription.next().await?;

        let Some(user) = user else {
            return Some(GateDecision::RedirectToLogin);
        };

        let points = match self.reader.read_points(&user).await {
            Ok(points) => points.unwrap_or(0),
            Err(_) => 0,
        };

        Some(GateDecision::Authenticated { user, points })
    }

    /// Single decision for a one-shot command surface. The subscription is
    /// released afterwards; an already released gate redirects.
    pub async fn decide_once(&mut self) -> GateDecision {
        let decision = self.next().await.unwrap_or(GateDecision::RedirectToLogin);
        self.release();
        decision
    }

    pub fn release(&mut self) {
        self.subscription.unsubscribe();
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }
}
