use crate::workflow::SyncWorkflow;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, warn};

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The sync pipeline run on each invocation
    pub workflow: Arc<SyncWorkflow>,
    /// Shared secret the scheduler must present on /sync
    pub cron_secret: String,
}

/// Successful sync response
#[derive(Debug, Serialize)]
struct SyncResponse {
    success: bool,
    events_synced: usize,
}

/// Generic failure response; details stay in the log
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: &'static str,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sync", get(sync_handler).post(sync_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for the health probe
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Handler for sync invocations.
///
/// The shared-secret check runs before the workflow, so an unauthorized
/// request makes no external calls.
async fn sync_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !authorized(&headers, &state.cron_secret) {
        warn!("Rejected /sync invocation with missing or invalid secret");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                success: false,
                error: "unauthorized",
            }),
        )
            .into_response();
    }

    match state.workflow.run().await {
        Ok(report) => (
            StatusCode::OK,
            Json(SyncResponse {
                success: true,
                events_synced: report.events_synced,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Sync run failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: "sync failed",
                }),
            )
                .into_response()
        }
    }
}

/// Check the bearer token against the configured cron secret
fn authorized(headers: &HeaderMap, secret: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token == secret)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authorized_with_matching_secret() {
        assert!(authorized(&headers_with("Bearer s3cret"), "s3cret"));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        assert!(!authorized(&headers_with("Bearer nope"), "s3cret"));
    }

    #[test]
    fn test_rejects_missing_header() {
        assert!(!authorized(&HeaderMap::new(), "s3cret"));
    }

    #[test]
    fn test_rejects_non_bearer_scheme() {
        assert!(!authorized(&headers_with("Basic s3cret"), "s3cret"));
    }
}
