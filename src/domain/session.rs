use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account record returned by the backend, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl User {
    #[cfg(test)]
    pub(crate) fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Best-effort label for display; the record itself is not validated.
    pub fn display_name(&self) -> Option<&str> {
        ["fullName", "full_name", "name", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
            .filter(|name| !name.trim().is_empty())
    }
}

/// Token and user returned by login/register.
#[derive(Clone, PartialEq, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for AuthGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGrant")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Process-wide view of who is signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    current_user: Option<User>,
    is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }
}

impl Session {
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// True only until the first session restore resolves.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    pub(crate) fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}
