//! Presentation helpers shared by the HTML pages and the terminal views.
//!
//! Everything here is a pure mapping from fetched data to display values.

use chrono::{DateTime, NaiveDateTime};

use crate::types::JobPost;

pub const UNTITLED: &str = "Untitled Job Post";
pub const NO_DESCRIPTION: &str = "No description available";

/// Tags shown on a card before collapsing into "+N more".
pub const CARD_TAG_LIMIT: usize = 3;

const EXCERPT_CHARS: usize = 300;

/// Pages shown on each side of the current page in the pagination control.
const PAGE_WINDOW: u32 = 2;

/// Display values for one card in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub id: i64,
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Number of tags beyond [`CARD_TAG_LIMIT`].
    pub more_tags: usize,
    pub date: String,
}

impl CardSummary {
    #[must_use]
    pub fn from_post(post: &JobPost) -> Self {
        let tags = post.tags();
        Self {
            id: post.id,
            href: detail_href(post.id),
            title: display_title(post).to_owned(),
            excerpt: truncate_chars(display_text(post), EXCERPT_CHARS),
            tags: tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            more_tags: tags.len().saturating_sub(CARD_TAG_LIMIT),
            date: format_short_date(&post.created_utc),
        }
    }
}

/// Display values for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSummary {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub posted: String,
    pub url: Option<String>,
}

impl DetailSummary {
    #[must_use]
    pub fn from_post(post: &JobPost) -> Self {
        Self {
            id: post.id,
            title: display_title(post).to_owned(),
            body: display_text(post).to_owned(),
            tags: post.tags().to_vec(),
            posted: format_long_date(&post.created_utc),
            url: post.url.clone().filter(|u| !u.is_empty()),
        }
    }
}

#[must_use]
pub fn detail_href(id: i64) -> String {
    format!("/jobs/{id}")
}

fn display_title(post: &JobPost) -> &str {
    post.cleaned_title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED)
}

fn display_text(post: &JobPost) -> &str {
    post.cleaned_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_DESCRIPTION)
}

/// Cuts `text` to at most `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `"Jan 5, 2024"`; unparseable input is returned unchanged.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// `"January 5, 2024 at 09:30 AM"`; unparseable input is returned unchanged.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |dt| dt.format("%B %-d, %Y at %I:%M %p").to_string(),
    )
}

#[must_use]
pub fn result_count_label(total: u64) -> String {
    if total == 1 {
        "Found 1 job".to_string()
    } else {
        format!("Found {total} jobs")
    }
}

/// One element of the pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    /// Page to navigate to; `None` renders as disabled text.
    pub target: Option<u32>,
    pub is_current: bool,
}

impl PageLink {
    fn number(page: u32, current: u32) -> Self {
        Self {
            label: page.to_string(),
            target: Some(page),
            is_current: page == current,
        }
    }

    fn gap() -> Self {
        Self {
            label: "\u{2026}".to_string(),
            target: None,
            is_current: false,
        }
    }
}

/// Builds the pagination control for `current` of `total_pages`.
///
/// Shows previous/next, the first and last pages, and the pages within two of
/// the current one. Returns nothing when there is at most one page.
#[must_use]
pub fn pagination_window(current: u32, total_pages: u32) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut links = vec![PageLink {
        label: "Previous".to_string(),
        target: (current > 1).then(|| (current - 1).min(total_pages)),
        is_current: false,
    }];

    let low = current.saturating_sub(PAGE_WINDOW).max(1);
    let high = current.saturating_add(PAGE_WINDOW).min(total_pages);
    let mut pages: Vec<u32> = vec![1];
    pages.extend(low..=high);
    pages.push(total_pages);
    pages.sort_unstable();
    pages.dedup();

    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            links.push(PageLink::gap());
        }
        links.push(PageLink::number(page, current));
        previous = page;
    }

    links.push(PageLink {
        label: "Next".to_string(),
        target: (current < total_pages).then(|| current + 1),
        is_current: false,
    });
    links
}
