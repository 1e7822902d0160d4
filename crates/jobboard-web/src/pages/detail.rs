use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Extension,
};
use jobboard_core::present::DetailSummary;

use super::views::{DetailBody, DetailPage};
use super::{AppState, PageError};
use crate::middleware::RequestId;

const NOT_FOUND_MESSAGE: &str = "Job not found";

/// Parses a path segment as a job id. Only positive integers are ids.
fn parse_job_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn not_found_page() -> Result<(StatusCode, Html<String>), PageError> {
    let page = DetailPage {
        body: DetailBody::Missing(NOT_FOUND_MESSAGE.to_string()),
    };
    Ok((StatusCode::NOT_FOUND, Html(page.render()?)))
}

/// `GET /jobs` and `GET /jobs/`: a detail link without an id.
pub(super) async fn missing_job_page() -> Result<(StatusCode, Html<String>), PageError> {
    not_found_page()
}

/// `GET /jobs/{id}`: one job post.
///
/// An id that is not a positive integer is answered with 404 without asking
/// upstream. Upstream error statuses are passed through; transport and decode
/// failures become 502.
pub(super) async fn detail_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Html<String>), PageError> {
    let Some(id) = parse_job_id(&raw_id) else {
        tracing::debug!(request_id = %req_id.0, id = %raw_id, "rejecting invalid job id");
        return not_found_page();
    };

    let (status, body) = match state.client.get_job_post(id).await {
        Ok(post) => (StatusCode::OK, DetailBody::Found(DetailSummary::from_post(&post))),
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, job_id = id, error = %e, "job post fetch failed");
            let status = e
                .status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (status, DetailBody::Missing(e.display_message()))
        }
    };

    let page = DetailPage { body };
    Ok((status, Html(page.render()?)))
}
