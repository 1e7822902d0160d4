//! Plain-text rendering of listings, posts and statistics.
//!
//! Every function returns the full text (newline-terminated) so the browse
//! session and the one-shot commands print the same thing.

use std::fmt::Write as _;

use jobboard_core::present::{pagination_window, result_count_label, CardSummary, DetailSummary};
use jobboard_core::{JobPostListResponse, Stats, ViewState};

pub(crate) const LOADING: &str = "Loading...";
pub(crate) const NOT_FOUND: &str = "Job not found";
const NO_TAGS: &str = "No tags";

pub(crate) fn render_listing(page: &JobPostListResponse) -> String {
    if page.data.is_empty() {
        return "No jobs found\nTry adjusting your search or filters\n".to_string();
    }

    let mut out = format!("{}\n\n", result_count_label(page.total));
    for post in &page.data {
        out.push_str(&render_card(&CardSummary::from_post(post)));
    }
    if let Some(line) = render_pagination(page.page, page.total_pages) {
        let _ = writeln!(out, "\n{line}");
    }
    out
}

fn render_card(card: &CardSummary) -> String {
    let tags = if card.tags.is_empty() {
        NO_TAGS.to_string()
    } else if card.more_tags > 0 {
        format!("{} +{} more", card.tags.join(", "), card.more_tags)
    } else {
        card.tags.join(", ")
    };
    format!(
        "#{:<7} {:<13} {}\n         {}\n         {}\n",
        card.id, card.date, card.title, card.excerpt, tags
    )
}

/// `"< 1 [2] 3 … 9 >"`; `None` when everything fits on one page.
pub(crate) fn render_pagination(current: u32, total_pages: u32) -> Option<String> {
    let links = pagination_window(current, total_pages);
    if links.is_empty() {
        return None;
    }
    let parts: Vec<String> = links
        .iter()
        .map(|link| match (link.label.as_str(), link.target) {
            ("Previous", Some(_)) => "<".to_string(),
            ("Next", Some(_)) => ">".to_string(),
            ("Previous" | "Next", None) => " ".to_string(),
            _ if link.is_current => format!("[{}]", link.label),
            _ => link.label.clone(),
        })
        .collect();
    Some(format!(
        "Page {current} of {total_pages}   {}",
        parts.join(" ").trim()
    ))
}

/// Active filters line for the browse header; `None` when nothing is filtered.
pub(crate) fn render_filters(view: &ViewState) -> Option<String> {
    let mut parts = Vec::new();
    if !view.search.is_empty() {
        parts.push(format!("search: {}", view.search));
    }
    if !view.tags.is_empty() {
        parts.push(format!("tags: {}", view.tags.join(", ")));
    }
    (!parts.is_empty()).then(|| parts.join(" | "))
}

pub(crate) fn render_detail(post: &DetailSummary) -> String {
    let mut out = format!("{}\nPosted on {}\n", post.title, post.posted);
    if !post.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", post.tags.join(", "));
    }
    let _ = write!(out, "\nJob Description\n\n{}\n\n", post.body);
    if let Some(url) = &post.url {
        let _ = writeln!(out, "View Original Post: {url}");
    }
    let _ = writeln!(out, "Job ID: {}", post.id);
    out
}

pub(crate) fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags available\n".to_string();
    }
    let mut out = String::new();
    for tag in tags {
        let _ = writeln!(out, "{tag}");
    }
    out
}

pub(crate) fn render_stats(stats: &Stats) -> String {
    format!(
        "{:<26}{}\n{:<26}{}\n{:<26}{}\n{:<26}{}\n{:<26}{}\n",
        "TOTAL POSTS",
        stats.total_posts,
        "WITH CLEANED DATA",
        stats.posts_with_cleaned_data,
        "WITHOUT CLEANED DATA",
        stats.posts_without_cleaned_data,
        "OLDEST POST",
        stats.oldest_post_date.as_deref().unwrap_or("\u{2014}"),
        "NEWEST POST",
        stats.newest_post_date.as_deref().unwrap_or("\u{2014}"),
    )
}
