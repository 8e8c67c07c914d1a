use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ExtractionError;
use crate::extract;
use crate::fetch::Fetcher;
use crate::models::{ExtractRequest, ExtractResponse};

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        Self { fetcher: Arc::new(fetcher) }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/extract", post(extract_endpoint))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header, with credentials. A credentialed response
/// may not use `*`, so the request's own values are echoed back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn extract_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ExtractionError> {
    let Json(req) = payload.map_err(|e| ExtractionError::InvalidInput(e.body_text()))?;

    match extract::extract(state.fetcher.as_ref(), &req).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            match &e {
                ExtractionError::InvalidInput(_) => tracing::debug!(error = %e, "rejected request"),
                ExtractionError::ExtractionFailed(_) => {
                    tracing::warn!(url = %req.url, error = %e, "extraction failed")
                }
            }
            Err(e)
        }
    }
}
