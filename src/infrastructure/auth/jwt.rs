//! Session token generation and validation (HS256 compact JWS)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt::Debug;
use tracing::debug;

use crate::domain::session::{SecretKey, SessionClaims, TokenError, TokenIssueError};

/// Token lifetime when none is configured
pub const DEFAULT_TOKEN_TTL_MINUTES: u32 = 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: SecretKey,
    /// Token lifetime in minutes
    pub ttl_minutes: u32,
}

impl JwtConfig {
    pub fn new(secret: SecretKey, ttl_minutes: u32) -> Self {
        Self {
            secret,
            ttl_minutes,
        }
    }

    fn ttl(&self) -> Duration {
        Duration::minutes(i64::from(self.ttl_minutes))
    }
}

impl Default for JwtConfig {
    /// Freshly generated secret with the default lifetime
    fn default() -> Self {
        Self::new(SecretKey::generate(), DEFAULT_TOKEN_TTL_MINUTES)
    }
}

/// Trait for session token operations
pub trait SessionTokens: Send + Sync + Debug {
    /// Sign a token for `subject`, expiring one lifetime after `issued_at`
    fn create_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenIssueError>;

    /// Check `token` as of `now` and return its subject
    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError>;

    /// Token lifetime in minutes
    fn ttl_minutes(&self) -> u32;

    fn create(&self, subject: &str) -> Result<String, TokenIssueError> {
        self.create_at(subject, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }
}

/// JWT service signing with a single in-process secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &ALGORITHM)
            .field("ttl_minutes", &self.config.ttl_minutes)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.material());
        let decoding_key = DecodingKey::from_secret(config.secret.material());

        // Expiry is checked against the caller's clock in `verify_at`, so the
        // library only verifies the signature and that `exp` is present.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Create a JWT service with a freshly generated secret
    pub fn with_default_config() -> Self {
        Self::new(JwtConfig::default())
    }

    /// Decode and check the signature without looking at expiry
    fn decode_claims(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Rejected session token");
                TokenError::InvalidToken
            })
    }
}

impl SessionTokens for JwtService {
    fn create_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenIssueError> {
        let claims = SessionClaims::new(subject, issued_at, self.config.ttl());

        Ok(encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?)
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, "Session token expired");
            return Err(TokenError::ExpiredToken);
        }

        Ok(claims.sub)
    }

    fn ttl_minutes(&self) -> u32 {
        self.config.ttl_minutes
    }
}
