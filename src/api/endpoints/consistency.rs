//! Cross-reference consistency endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::store::consistency::{self, ConsistencyReport};

/// `GET /api/consistency` - report doctor and staff back-reference
/// drift without changing anything.
pub async fn report(State(ctx): State<ApiContext>) -> Result<Json<ConsistencyReport>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(consistency::check(&document)))
}

#[derive(Serialize)]
pub struct RepairResponse {
    pub repaired: usize,
}

/// `POST /api/consistency/repair` - rebuild the derived lists from the
/// authoritative staff assignments.
pub async fn repair(State(ctx): State<ApiContext>) -> Result<Json<RepairResponse>, ApiError> {
    let repaired = ctx
        .store
        .mutate(|document| Ok(consistency::repair(document)))
        .await?;
    Ok(Json(RepairResponse { repaired }))
}
