use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use skuscan_catalog::Termination;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    title: Option<String>,
}

/// `GET /fetch-products?title=<substring>`
///
/// Returns every matching variant as `"<product> - <variant> - $<price>"`,
/// sorted ascending by price. An upstream failure mid-pagination truncates
/// the result instead of failing the request, so the body alone cannot
/// distinguish "no matches" from "catalog broke" — check the logs.
pub(super) async fn fetch_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    // No trimming: only a missing or empty value is rejected.
    let title = params.title.unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::MissingTitle);
    }

    let results = state.catalog.collect_variants(&title).await;
    match results.termination {
        Termination::UpstreamError | Termination::PageLimit => {
            tracing::warn!(
                request_id = %req_id.0,
                title = %title,
                entries = results.entries.len(),
                termination = ?results.termination,
                "returning truncated results"
            );
        }
        Termination::Exhausted | Termination::EmptyPage => {
            tracing::debug!(
                request_id = %req_id.0,
                title = %title,
                entries = results.entries.len(),
                "search complete"
            );
        }
    }

    Ok(Json(results.entries))
}
