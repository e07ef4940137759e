mod search;

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use skuscan_catalog::CatalogClient;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id;

/// Inbound body cap. The search endpoint only reads a query parameter, so
/// this is effectively unused, but the limit stays enforced at the
/// framework layer.
const MAX_BODY_BYTES: usize = 20 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

/// Request-level failures with contract-fixed bodies.
///
/// Upstream page failures are deliberately NOT represented here — the
/// aggregator swallows them and the request still succeeds with whatever
/// was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiError {
    MissingTitle,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingTitle => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Title is required",
                }),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to fetch products",
                }),
            )
                .into_response(),
        }
    }
}

/// Maps a handler panic onto the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned());
    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::Internal.into_response()
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/fetch-products", get(search::fetch_products))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(axum::middleware::from_fn(request_id))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
