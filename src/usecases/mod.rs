//! Use case layer: conversation, session, and account workflows.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod conversation;
pub mod guided_auth;
pub mod session;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
