//! Domain layer - Core types and errors

pub mod session;

pub use session::{SecretKey, SessionClaims, TokenError, TokenIssueError};
