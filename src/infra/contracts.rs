use anyhow::Result;

use crate::infra::{config::AppConfig, error::AppError};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Local persistence for the opaque session token.
///
/// Only the session gateway writes through this trait. A blank saved token
/// reads back as absent.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, AppError>;
    fn save(&mut self, token: &str) -> Result<(), AppError>;
    /// Removes the stored token. Returns whether a token was present.
    fn clear(&mut self) -> Result<bool, AppError>;
}
