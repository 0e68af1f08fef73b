use std::io;

use crate::infra::{contracts::TokenStore, error::AppError};

/// Token store held in memory. Each flag makes the matching operation fail
/// the way an unwritable session directory would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    pub token: Option<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_clear: bool,
}

impl InMemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            token: Some("unreachable".to_owned()),
            fail_reads: true,
            ..Self::default()
        }
    }

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "read-only store")
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        if self.fail_reads {
            return Err(AppError::TokenRead {
                path: "memory://auth_token".into(),
                source: Self::denied(),
            });
        }

        Ok(self
            .token
            .clone()
            .filter(|token| !token.trim().is_empty()))
    }

    fn save(&mut self, token: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::TokenWrite {
                path: "memory://auth_token".into(),
                source: Self::denied(),
            });
        }
        self.token = Some(token.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, AppError> {
        if self.fail_clear {
            return Err(AppError::TokenRemove {
                path: "memory://auth_token".into(),
                source: Self::denied(),
            });
        }
        Ok(self.token.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_store_rejects_writes_and_keeps_state() {
        let mut store = InMemoryTokenStore::failing();

        assert!(store.save("tok").is_err());
        assert_eq!(store.load().expect("load should succeed"), None);
    }

    #[test]
    fn blank_token_reads_as_absent() {
        let mut store = InMemoryTokenStore::with_token("tok");

        store.save("").expect("save should succeed");

        assert_eq!(store.load().expect("load should succeed"), None);
    }
}
