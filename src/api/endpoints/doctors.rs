//! Doctor endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Doctor, NewDoctor};
use crate::store::repository::doctor;

/// `GET /api/doctors`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(doctor::list(&document)))
}

/// `POST /api/doctors`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewDoctor>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let created = ctx
        .store
        .mutate(move |document| Ok(doctor::create(document, payload)))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/doctors/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Doctor>, ApiError> {
    let updated = ctx
        .store
        .mutate(move |document| doctor::update(document, id, patch))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/doctors/:id` - idempotent; unassigns this doctor's
/// staff before removing the record.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    ctx.store
        .mutate(move |document| {
            doctor::delete(document, id);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
