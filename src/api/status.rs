//! Service status endpoint

use axum::extract::State;
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub data: AppInfo,
}

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub app_name: String,
    pub version: String,
    pub description: String,
}

/// GET /
pub async fn server_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let info = &state.app_info;

    Json(StatusResponse {
        message: "Server is running".to_string(),
        status: "success".to_string(),
        data: AppInfo {
            app_name: info.name.clone(),
            version: info.version.clone(),
            description: info.description.clone(),
        },
    })
}
