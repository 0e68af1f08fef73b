//! Account backend integration: HTTP client for the `/auth/*` endpoints.

mod http;

pub use http::HttpAuthApi;

/// Returns the api module name for smoke checks.
pub fn module_name() -> &'static str {
    "api"
}
