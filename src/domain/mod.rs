//! Domain layer: conversation entities, session state, and keyword rules.

pub mod conversation;
pub mod dispatcher;
pub mod responses;
pub mod session;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
