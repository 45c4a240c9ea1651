//! Authentication infrastructure module
//!
//! This module provides session token signing and verification.

mod jwt;

pub use jwt::{JwtConfig, JwtService, SessionTokens, DEFAULT_TOKEN_TTL_MINUTES};
