use askama::Template;
use axum::{
    extract::{RawQuery, State},
    response::Html,
    Extension,
};
use jobboard_core::{JobPostFilters, QueryParams, ViewState};

use super::views::{ListingBody, ListingPage, ResultsView, SearchBarView, TagFilterView};
use super::{AppState, PageError};
use crate::middleware::RequestId;

/// `GET /`: the filtered, paginated listing.
///
/// Always renders with 200; an upstream failure replaces the results with an
/// error banner while the search bar and tag filter stay usable.
pub(super) async fn listing_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, PageError> {
    let query = query.unwrap_or_default();
    let view = ViewState::parse(&query);
    let params = QueryParams::parse(&query);
    let filters = JobPostFilters::for_view(&view, state.page_size);

    let (listing, tags) = tokio::join!(
        state.client.list_job_posts(&filters),
        state.client.list_tags(),
    );

    let vocabulary = tags.unwrap_or_else(|e| {
        tracing::warn!(request_id = %req_id.0, error = %e, "tag vocabulary unavailable");
        Vec::new()
    });

    let body = match listing {
        Ok(page) if page.data.is_empty() => ListingBody::Empty,
        Ok(page) => {
            tracing::debug!(
                request_id = %req_id.0,
                page = page.page,
                total = page.total,
                shown = page.data.len(),
                "listing fetched"
            );
            ListingBody::Results(ResultsView::new(&page, &params))
        }
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "listing fetch failed");
            ListingBody::Failed(e.display_message())
        }
    };

    let page = ListingPage {
        search_bar: SearchBarView::new(&view, &params),
        tag_filter: TagFilterView::new(&view, &params, &vocabulary),
        body,
    };
    Ok(Html(page.render()?))
}
