use std::io;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::{AuthGrant, User};

/// Produces the assistant reply for one user turn.
#[async_trait]
pub trait Responder {
    async fn respond(&self, input: &str) -> Result<String, RespondError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("responder failed: {message}")]
pub struct RespondError {
    pub message: String,
}

/// Errors reported by the remote account API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthApiError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("account backend unreachable: {message}")]
    Transport { message: String },
    #[error("unexpected response from account backend: {message}")]
    Decode { message: String },
}

impl AuthApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "AUTH_UNAUTHORIZED",
            Self::Rejected { .. } => "AUTH_REJECTED",
            Self::Transport { .. } => "AUTH_BACKEND_UNAVAILABLE",
            Self::Decode { .. } => "AUTH_BAD_RESPONSE",
        }
    }
}

/// Remote `/auth/*` endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `GET /auth/me`, sending the stored token when there is one.
    async fn current_user(&self, token: Option<&str>) -> Result<User, AuthApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, AuthApiError>;
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthGrant, AuthApiError>;
    async fn send_otp(&self, email: &str) -> Result<(), AuthApiError>;
    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), AuthApiError>;
}

/// Line-oriented terminal used by the chat shell and account prompts.
pub trait LineTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_codes_are_stable_auth_codes() {
        let errors = [
            AuthApiError::Unauthorized,
            AuthApiError::Rejected {
                status: 422,
                message: "bad".into(),
            },
            AuthApiError::Transport {
                message: "refused".into(),
            },
            AuthApiError::Decode {
                message: "eof".into(),
            },
        ];

        for error in errors {
            let code = error.code();
            assert_eq!(crate::infra::secrets::sanitize_error_code(code), code);
        }
    }
}
