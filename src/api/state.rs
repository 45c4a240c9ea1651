//! Application state for shared services

use std::sync::Arc;

use crate::config::AppInfoConfig;
use crate::infrastructure::auth::SessionTokens;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<dyn SessionTokens>,
    pub app_info: Arc<AppInfoConfig>,
}

impl AppState {
    pub fn new(token_service: Arc<dyn SessionTokens>, app_info: AppInfoConfig) -> Self {
        Self {
            token_service,
            app_info: Arc::new(app_info),
        }
    }
}
