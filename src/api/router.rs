//! API router.
//!
//! Returns a composable `Router` with every route nested under `/api`.
//! The browser pages are served from another origin, so the router
//! carries a permissive CORS layer.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::store::JsonStore;

/// Build the API router over a shared store.
pub fn api_router(store: Arc<JsonStore>) -> Router {
    let ctx = ApiContext::new(store);

    let api = Router::new()
        .route("/data", get(endpoints::data::all))
        .route("/health", get(endpoints::health::check))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route(
            "/patients/:id",
            put(endpoints::patients::update).delete(endpoints::patients::remove),
        )
        .route(
            "/doctors",
            get(endpoints::doctors::list).post(endpoints::doctors::create),
        )
        .route(
            "/doctors/:id",
            put(endpoints::doctors::update).delete(endpoints::doctors::remove),
        )
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/:id",
            put(endpoints::appointments::update).delete(endpoints::appointments::remove),
        )
        .route(
            "/billing",
            get(endpoints::billing::list).post(endpoints::billing::create),
        )
        .route(
            "/billing/:id",
            put(endpoints::billing::update).delete(endpoints::billing::remove),
        )
        .route(
            "/staff",
            get(endpoints::staff::list).post(endpoints::staff::create),
        )
        .route(
            "/staff/:id",
            put(endpoints::staff::update).delete(endpoints::staff::remove),
        )
        .route("/consistency", get(endpoints::consistency::report))
        .route("/consistency/repair", post(endpoints::consistency::repair))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}
