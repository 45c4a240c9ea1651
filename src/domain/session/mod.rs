//! Session domain
//!
//! Types shared by token issuance and verification: the claim carried by a
//! session token, the process secret used to sign it, and the typed failures
//! a presented token can produce.

mod claims;
mod error;
mod key;

pub use claims::SessionClaims;
pub use error::{TokenError, TokenIssueError};
pub use key::SecretKey;
