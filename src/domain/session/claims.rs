//! Session claim carried in the token payload

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims encoded into every session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (the username supplied at login)
    pub sub: String,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for `subject` that expire `ttl` after `issued_at`
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Valid up to and including the instant `exp`; an unrepresentable
    /// expiry counts as expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_none_or(|expires_at| now > expires_at)
    }
}
