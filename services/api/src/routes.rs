use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use saeum_academy::catalog::{catalog_router, Catalog};
use saeum_academy::contact::{contact_router, ContactIntake};
use saeum_academy::media::fallback_router;
use serde_json::json;

/// Operational endpoints plus the catalog, contact and media routers,
/// mounted under `base_path` when one is configured.
pub(crate) fn app_router(catalog: &'static Catalog, state: AppState, base_path: &str) -> Router {
    let site = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(catalog_router(catalog))
        .merge(contact_router(ContactIntake::new()))
        .merge(fallback_router())
        .layer(Extension(state));

    if base_path.is_empty() {
        site
    } else {
        Router::new().nest(base_path, site)
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            String::new(),
        ),
    }
}
