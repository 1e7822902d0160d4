//! HTML pages and the JSON health probe.
//!
//! Every page derives what it shows from the request URL alone and fetches
//! fresh data from the upstream API on each request.

mod detail;
mod listing;
mod search;
mod views;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use jobboard_client::JobBoardClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<JobBoardClient>,
    /// Posts requested per listing page.
    pub page_size: u32,
}

impl AppState {
    pub fn new(client: JobBoardClient, page_size: u32) -> Self {
        Self {
            client: Arc::new(client),
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    upstream: &'static str,
}

/// A page that could not be rendered at all.
///
/// Upstream failures never end up here; they are rendered in place of the
/// page content. This only covers template failures.
#[derive(Debug)]
pub(crate) struct PageError(askama::Error);

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "template rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing::listing_page))
        .route("/search", get(search::submit_search))
        .route("/jobs", get(detail::missing_job_page))
        .route("/jobs/", get(detail::missing_job_page))
        .route("/jobs/{id}", get(detail::detail_page))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match state.client.health().await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    upstream: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: upstream unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        upstream: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
