//! Session endpoints
//!
//! `/login` issues a token for any username without checking credentials and
//! `/protected` answers only to a valid bearer token.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/protected", get(protected))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.token_service.create(&request.username)?;

    info!(
        ttl_minutes = state.token_service.ttl_minutes(),
        "Issued session token"
    );

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// GET /protected
pub async fn protected(RequireSession(username): RequireSession) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: format!("Hello {}, here is your secure data!", username),
    })
}
