//! Session authentication using bearer tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires a valid session token and yields its subject
///
/// The token is read from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireSession(pub String);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Validating session token");

        let subject = state.token_service.verify(token)?;

        Ok(RequireSession(subject))
    }
}

/// Extract the bearer token from the Authorization header
///
/// The scheme is matched case-insensitively. A missing header, another scheme
/// or an empty credential all count as not authenticated.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(ApiError::not_authenticated)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(ApiError::not_authenticated)?;

    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(ApiError::not_authenticated());
    }

    Ok(token)
}
