//! View-state derived from the listing URL's query string.
//!
//! The query string is the only persistent state of the browser: `page`,
//! `search` and `tags` fully determine what the listing requests and shows.
//! [`ViewState::parse`] and [`ViewState::to_query`] are pure so the same URL
//! always yields the same view.

use url::form_urlencoded;

pub const PAGE_PARAM: &str = "page";
pub const SEARCH_PARAM: &str = "search";
pub const TAGS_PARAM: &str = "tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based page number.
    pub page: u32,
    pub search: String,
    /// Selected tags in selection order.
    pub tags: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            tags: Vec::new(),
        }
    }
}

impl ViewState {
    /// Derives the view from a raw query string (with or without the leading `?`).
    ///
    /// The first occurrence of each parameter wins. A `page` that is missing,
    /// non-numeric, zero, negative or out of range becomes `1`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut search = None;
        let mut tags = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                PAGE_PARAM => &mut page,
                SEARCH_PARAM => &mut search,
                TAGS_PARAM => &mut tags,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            page: coerce_page(page.as_deref()),
            search: search.unwrap_or_default(),
            tags: split_tags(tags.as_deref().unwrap_or_default()),
        }
    }

    /// Serializes the view back into a query string (without the leading `?`).
    ///
    /// `page` is always written; `search` and `tags` only when non-empty.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        if !self.tags.is_empty() {
            serializer.append_pair(TAGS_PARAM, &self.tags_param());
        }
        serializer.finish()
    }

    /// The comma-joined form of the selected tags, as sent upstream.
    #[must_use]
    pub fn tags_param(&self) -> String {
        self.tags.join(",")
    }

    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Splits a comma-joined tag parameter. An empty value means no tags.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(ToOwned::to_owned).collect()
}

fn coerce_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(1)
}
