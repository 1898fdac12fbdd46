//! Patient endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::api::validate;
use crate::models::{NewPatient, Patient};
use crate::store::repository::patient;

/// `GET /api/patients`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(patient::list(&document)))
}

/// `POST /api/patients`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    validate::phone(&payload.phone)?;
    let created = ctx
        .store
        .mutate(move |document| Ok(patient::create(document, payload)))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/patients/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Patient>, ApiError> {
    validate::patient_patch(&patch)?;
    let updated = ctx
        .store
        .mutate(move |document| patient::update(document, id, patch))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/patients/:id` - idempotent.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    ctx.store
        .mutate(move |document| {
            patient::delete(document, id);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
