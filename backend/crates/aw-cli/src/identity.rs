//! Client-side view of "who is signed in".
//!
//! `AuthState` is the single source of truth for the current user. Surfaces
//! that react to sign-in and sign-out hold an `AuthSubscription`; the first
//! `next()` reports the current user, later calls wait for a change.

use crate::{AuthSession, CliClientResult, Client};

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

/// The signed-in user as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    /// Bearer token for authenticated calls
    pub token: String,
}

impl From<AuthSession> for AuthUser {
    fn from(session: AuthSession) -> Self {
        Self {
            uid: session.uid,
            email: session.email,
            token: session.token,
        }
    }
}

/// Issues and verifies credentials
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> CliClientResult<AuthSession>;
    async fn sign_in(&self, email: &str, password: &str) -> CliClientResult<AuthSession>;
}

#[async_trait]
impl IdentityProvider for Client {
    async fn sign_up(&self, email: &str, password: &str) -> CliClientResult<AuthSession> {
        Client::sign_up(self, email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> CliClientResult<AuthSession> {
        Client::sign_in(self, email, password).await
    }
}

#[derive(Clone)]
pub struct AuthState {
    sender: Arc<watch::Sender<Option<AuthUser>>>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AuthState {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            sender: Arc::new(watch::Sender::new(user)),
        }
    }

    pub fn current(&self) -> Option<AuthUser> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: Some(self.sender.subscribe()),
            delivered_initial: false,
        }
    }

    /// Create the account, then make it the current user
    pub async fn sign_up(
        &self,
        provider: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> CliClientResult<AuthSession> {
        let session = provider.sign_up(email, password).await?;
        self.set_user(Some(session.clone().into()));
        Ok(session)
    }

    pub async fn sign_in(
        &self,
        provider: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> CliClientResult<AuthSession> {
        let session = provider.sign_in(email, password).await?;
        self.set_user(Some(session.clone().into()));
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.set_user(None);
    }

    fn set_user(&self, user: Option<AuthUser>) {
        self.sender.send_replace(user);
    }
}

/// A live listener on `AuthState`. Dropping it unsubscribes.
pub struct AuthSubscription {
    receiver: Option<watch::Receiver<Option<AuthUser>>>,
    delivered_initial: bool,
}

impl AuthSubscription {
    /// Next auth-state event. `None` once unsubscribed or when every
    /// `AuthState` handle is gone.
    pub async fn next(&mut self) -> Option<Option<AuthUser>> {
        let receiver = self.receiver.as_mut()?;

        if !self.delivered_initial {
            self.delivered_initial = true;
            return Some(receiver.borrow_and_update().clone());
        }

        receiver.changed().await.ok()?;
        Some(receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(&mut self) {
        self.receiver = None;
    }

    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }
}
