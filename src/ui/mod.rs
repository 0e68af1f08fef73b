//! UI layer: line-based chat shell and transcript rendering.

mod message_rendering;
pub mod shell;
mod styles;
mod terminal;

pub use terminal::StdTerminal;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
