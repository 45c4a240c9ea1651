//! Session Token API
//!
//! A small HTTP service that issues HS256-signed session tokens at `/login`
//! and checks them on `/protected`. The signing secret lives only in process
//! memory.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::session::SecretKey;
use infrastructure::auth::{JwtConfig, JwtService};
use tracing::{info, warn};

/// Create the application state with a freshly generated signing secret
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    warn!(
        "Generating random session secret. \
        Tokens will NOT remain valid across restarts."
    );

    let jwt_config = JwtConfig::new(SecretKey::generate(), config.auth.token_ttl_minutes);
    let token_service = Arc::new(JwtService::new(jwt_config));

    info!(
        ttl_minutes = config.auth.token_ttl_minutes,
        "Session token service ready"
    );

    AppState::new(token_service, config.app.clone())
}
