//! Billing endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::api::validate;
use crate::models::{Billing, NewBilling};
use crate::store::repository::billing;

/// `GET /api/billing`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Billing>>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(billing::list(&document)))
}

/// `POST /api/billing`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewBilling>,
) -> Result<(StatusCode, Json<Billing>), ApiError> {
    validate::positive_amount(payload.amount)?;
    validate::billing_date(payload.date)?;
    let created = ctx
        .store
        .mutate(move |document| Ok(billing::create(document, payload)))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/billing/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Billing>, ApiError> {
    validate::billing_patch(&patch)?;
    let updated = ctx
        .store
        .mutate(move |document| billing::update(document, id, patch))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/billing/:id` - idempotent.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    ctx.store
        .mutate(move |document| {
            billing::delete(document, id);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
