//! Appointment endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::api::validate;
use crate::models::{Appointment, NewAppointment};
use crate::store::repository::appointment;

/// `GET /api/appointments`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Appointment>>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(appointment::list(&document)))
}

/// `POST /api/appointments`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    validate::appointment_date(payload.date)?;
    let created = ctx
        .store
        .mutate(move |document| Ok(appointment::create(document, payload)))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/appointments/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Appointment>, ApiError> {
    validate::appointment_patch(&patch)?;
    let updated = ctx
        .store
        .mutate(move |document| appointment::update(document, id, patch))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/appointments/:id` - idempotent.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    ctx.store
        .mutate(move |document| {
            appointment::delete(document, id);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
