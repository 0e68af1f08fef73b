//! Session gateway: the only writer of the shared session state.
//!
//! Consumers read the session through a [`SessionHandle`]; every mutation goes
//! through a gateway operation. On sign-in and sign-up the token is persisted
//! before the user is published, so the two never disagree.

use thiserror::Error;
use tokio::sync::watch;

use crate::{
    domain::session::{AuthGrant, Session, User},
    infra::{contracts::TokenStore, error::AppError, secrets::mask_email},
};

use super::contracts::{AuthApi, AuthApiError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Api(#[from] AuthApiError),
    #[error("session token could not be persisted: {0}")]
    TokenStore(#[source] AppError),
}

impl GatewayError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Api(error) => error.code(),
            Self::TokenStore(_) => "AUTH_SESSION_PERSIST_FAILED",
        }
    }
}

/// What happened to the stored token on sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCleanup {
    Removed,
    Absent,
    /// Removal failed; the stored token was overwritten with a blank one.
    Blanked,
    /// Neither removal nor overwrite worked. The token is still on disk.
    Retained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOutOutcome {
    pub token: TokenCleanup,
}

impl SignOutOutcome {
    /// True when no usable token remains in the store.
    pub fn token_cleared(&self) -> bool {
        self.token != TokenCleanup::Retained
    }
}

/// Read-only view of the session, updated whenever the gateway publishes.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    receiver: watch::Receiver<Session>,
}

impl SessionHandle {
    pub fn current_user(&self) -> Option<User> {
        self.receiver.borrow().current_user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.receiver.borrow().is_loading()
    }

    /// Waits for the next published change. Returns false once the gateway
    /// has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

pub struct SessionGateway<A, S>
where
    A: AuthApi,
    S: TokenStore,
{
    api: A,
    tokens: S,
    state: watch::Sender<Session>,
}

impl<A, S> SessionGateway<A, S>
where
    A: AuthApi,
    S: TokenStore,
{
    pub fn new(api: A, tokens: S) -> Self {
        let (state, _) = watch::channel(Session::default());

        Self { api, tokens, state }
    }

    pub fn subscribe(&self) -> SessionHandle {
        SessionHandle {
            receiver: self.state.subscribe(),
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn token_store(&self) -> &S {
        &self.tokens
    }

    /// Resolves the initial session. Failures leave the visitor signed out.
    pub async fn restore_session(&mut self) -> Option<User> {
        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(error = %error, "stored session token unreadable; restoring without it");
                None
            }
        };

        let user = match self.api.current_user(token.as_deref()).await {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::debug!(
                    code = error.code(),
                    had_token = token.is_some(),
                    "session restore failed; continuing unauthenticated"
                );
                None
            }
        };

        self.state.send_modify(|session| {
            session.set_user(user.clone());
            session.finish_loading();
        });

        user
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User, GatewayError> {
        tracing::info!(email = %mask_email(email), "signing in");
        let grant = self.api.login(email, password).await?;

        self.establish(grant)
    }

    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, GatewayError> {
        tracing::info!(email = %mask_email(email), "registering account");
        let grant = self.api.register(email, password, full_name).await?;

        self.establish(grant)
    }

    /// Clears the user unconditionally. A token that cannot be removed is
    /// overwritten with a blank one; the outcome reports when even that fails.
    pub async fn sign_out(&mut self) -> SignOutOutcome {
        let token = match self.tokens.clear() {
            Ok(true) => TokenCleanup::Removed,
            Ok(false) => TokenCleanup::Absent,
            Err(error) => {
                tracing::warn!(error = %error, "failed to remove stored session token; blanking it");
                match self.tokens.save("") {
                    Ok(()) => TokenCleanup::Blanked,
                    Err(error) => {
                        tracing::error!(
                            code = "AUTH_SESSION_PERSIST_FAILED",
                            error = %error,
                            "stored session token could not be cleared"
                        );
                        TokenCleanup::Retained
                    }
                }
            }
        };

        self.state.send_modify(|session| session.set_user(None));
        tracing::info!(token = ?token, "signed out");

        SignOutOutcome { token }
    }

    pub async fn send_otp(&self, email: &str) -> Result<(), GatewayError> {
        tracing::info!(email = %mask_email(email), "requesting one-time passcode");
        self.api.send_otp(email).await?;

        Ok(())
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), GatewayError> {
        tracing::info!(email = %mask_email(email), "verifying one-time passcode");
        self.api.verify_otp(email, otp).await?;

        Ok(())
    }

    fn establish(&mut self, grant: AuthGrant) -> Result<User, GatewayError> {
        self.tokens
            .save(&grant.token)
            .map_err(GatewayError::TokenStore)?;

        let user = grant.user;
        self.state
            .send_modify(|session| session.set_user(Some(user.clone())));
        tracing::info!("session established");

        Ok(user)
    }
}
