//! Staff endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewStaff, Staff};
use crate::store::repository::staff;

/// `GET /api/staff`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Staff>>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(staff::list(&document)))
}

/// `POST /api/staff`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewStaff>,
) -> Result<(StatusCode, Json<Staff>), ApiError> {
    let created = ctx
        .store
        .mutate(move |document| Ok(staff::create(document, payload)))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/staff/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Staff>, ApiError> {
    let updated = ctx
        .store
        .mutate(move |document| staff::update(document, id, patch))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/staff/:id` - idempotent; drops the back-reference from
/// the assigned doctor before removing the record.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    ctx.store
        .mutate(move |document| {
            staff::delete(document, id);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
