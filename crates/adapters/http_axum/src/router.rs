//! Axum router assembly.

use std::any::Any;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use holonet_app::ports::{PeopleRepository, PlanetRepository, UserRepository, VehicleRepository};

use crate::api::ENDPOINTS;
use crate::error::ApiError;
use crate::state::AppState;

/// The served application: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Build the top-level application.
///
/// Serves the API routes plus `/health` and a `/` sitemap. Unknown paths get
/// a JSON `404`; a known path with the wrong verb gets a JSON `405`.
/// A [`TraceLayer`] logs each request/response at `DEBUG`, cross-origin
/// requests are allowed from anywhere, and a panicking handler answers `500`
/// instead of dropping the connection.
///
/// `/people/` and `/people` route identically: trailing slashes are trimmed
/// before routing.
pub fn build<UR, PLR, PR, VR>(state: AppState<UR, PLR, PR, VR>) -> App
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PR: PeopleRepository + Send + Sync + 'static,
    VR: VehicleRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn sitemap() -> Json<serde_json::Value> {
    Json(json!({ "endpoints": ENDPOINTS }))
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Recurso no encontrado")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Método no permitido")
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "handler panicked");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
}
