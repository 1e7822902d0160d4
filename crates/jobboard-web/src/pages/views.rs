//! Template contexts for the HTML pages.
//!
//! Each struct is a pure projection of fetched data plus the current query
//! parameters. All links are precomputed here through the filter update
//! protocol so the templates never build URLs themselves.

use askama::Template;
use jobboard_core::present::{pagination_window, result_count_label, CardSummary, DetailSummary};
use jobboard_core::query::{
    apply_updates, clear_tags_update, listing_href, page_update, tags_update,
};
use jobboard_core::view_state::{PAGE_PARAM, SEARCH_PARAM};
use jobboard_core::{toggle_tag, JobPostListResponse, QueryParams, ViewState};

pub(super) struct HiddenField {
    pub name: String,
    pub value: String,
}

pub(super) struct SearchBarView {
    pub value: String,
    /// Current parameters the search form carries along (everything except
    /// `search` and `page`).
    pub hidden: Vec<HiddenField>,
}

impl SearchBarView {
    pub(super) fn new(view: &ViewState, params: &QueryParams) -> Self {
        let hidden = params
            .iter()
            .filter(|(name, _)| *name != SEARCH_PARAM && *name != PAGE_PARAM)
            .map(|(name, value)| HiddenField {
                name: name.to_owned(),
                value: value.to_owned(),
            })
            .collect();
        Self {
            value: view.search.clone(),
            hidden,
        }
    }
}

pub(super) struct TagChip {
    pub name: String,
    pub remove_href: String,
}

pub(super) struct TagOption {
    pub name: String,
    pub selected: bool,
    pub toggle_href: String,
}

pub(super) struct TagFilterView {
    pub selected: Vec<TagChip>,
    pub clear_href: String,
    pub options: Vec<TagOption>,
}

impl TagFilterView {
    pub(super) fn new(view: &ViewState, params: &QueryParams, vocabulary: &[String]) -> Self {
        let toggle_href = |tag: &str| {
            let next = toggle_tag(&view.tags, tag);
            listing_href(&apply_updates(params, &[tags_update(&next)]))
        };

        Self {
            selected: view
                .tags
                .iter()
                .map(|tag| TagChip {
                    name: tag.clone(),
                    remove_href: toggle_href(tag),
                })
                .collect(),
            clear_href: listing_href(&apply_updates(params, &[clear_tags_update()])),
            options: vocabulary
                .iter()
                .map(|tag| TagOption {
                    name: tag.clone(),
                    selected: view.is_tag_selected(tag),
                    toggle_href: toggle_href(tag),
                })
                .collect(),
        }
    }
}

pub(super) struct PageLinkView {
    pub label: String,
    pub href: Option<String>,
    pub is_current: bool,
}

pub(super) struct ResultsView {
    pub count_label: String,
    pub cards: Vec<CardSummary>,
    pub pagination: Vec<PageLinkView>,
}

impl ResultsView {
    pub(super) fn new(page: &JobPostListResponse, params: &QueryParams) -> Self {
        let pagination = pagination_window(page.page, page.total_pages)
            .into_iter()
            .map(|link| PageLinkView {
                href: link
                    .target
                    .filter(|_| !link.is_current)
                    .map(|target| listing_href(&apply_updates(params, &[page_update(target)]))),
                label: link.label,
                is_current: link.is_current,
            })
            .collect();

        Self {
            count_label: result_count_label(page.total),
            cards: page.data.iter().map(CardSummary::from_post).collect(),
            pagination,
        }
    }
}

pub(super) enum ListingBody {
    Failed(String),
    Empty,
    Results(ResultsView),
}

#[derive(Template)]
#[template(path = "listing.html")]
pub(super) struct ListingPage {
    pub search_bar: SearchBarView,
    pub tag_filter: TagFilterView,
    pub body: ListingBody,
}

pub(super) enum DetailBody {
    Missing(String),
    Found(DetailSummary),
}

#[derive(Template)]
#[template(path = "detail.html")]
pub(super) struct DetailPage {
    pub body: DetailBody,
}
