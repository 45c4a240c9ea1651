use thiserror::Error;

/// Why a presented session token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed token, unexpected algorithm, missing claims or signature mismatch
    #[error("Invalid token")]
    InvalidToken,

    /// Signature is valid but the expiry has passed
    #[error("Token expired")]
    ExpiredToken,
}

/// Signing failure reported by the token library
#[derive(Debug, Error)]
#[error("Failed to sign session token: {0}")]
pub struct TokenIssueError(#[from] pub jsonwebtoken::errors::Error);
