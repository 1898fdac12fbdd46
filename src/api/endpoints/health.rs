//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub data_file: String,
    pub version: &'static str,
}

/// `GET /api/health` - liveness probe; fails when the data file is
/// unreadable.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    ctx.store.load()?;

    Ok(Json(HealthResponse {
        status: "ok",
        data_file: ctx.store.path().display().to_string(),
        version: config::APP_VERSION,
    }))
}
