//! API middleware components

pub mod logging;
pub mod session_auth;

pub use logging::logging_middleware;
pub use session_auth::{extract_bearer_token, RequireSession};
