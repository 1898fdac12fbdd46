//! Whole-document endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::store::Document;

/// `GET /api/data` - the full document, user list included. The login
/// page scans it for a credential match; the dashboard derives its
/// counts from it.
pub async fn all(State(ctx): State<ApiContext>) -> Result<Json<Document>, ApiError> {
    let document = ctx.store.load()?;
    Ok(Json(document))
}
