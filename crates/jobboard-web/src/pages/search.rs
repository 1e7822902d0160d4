use axum::{extract::RawQuery, response::Redirect};
use jobboard_core::query::{listing_href, search_update};
use jobboard_core::{apply_updates, QueryParams};

/// Form field the search bar submits its text in.
const SEARCH_FIELD: &str = "q";

/// `GET /search`: turns a search bar submission into a listing URL.
///
/// The other fields the form carried (the current tags) are kept; `search`
/// is written through the update protocol so `page` goes back to 1, and
/// blank text removes the search instead of writing `search=`.
pub(super) async fn submit_search(RawQuery(query): RawQuery) -> Redirect {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());
    let text = params.get(SEARCH_FIELD).unwrap_or_default().trim().to_owned();
    let next = apply_updates(&params.without(SEARCH_FIELD), &[search_update(&text)]);
    Redirect::to(&listing_href(&next))
}
