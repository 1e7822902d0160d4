//! Wire types for the upstream job posts API.
//!
//! These mirror the JSON bodies of `/api/v1/job-posts`, `/api/v1/job-posts/{id}`
//! and `/api/v1/stats`. Everything here is an immutable snapshot of what the
//! upstream returned; nothing is patched after deserialization.

use serde::{Deserialize, Serialize};

use crate::view_state::ViewState;

/// Page size the listing requests when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One job post as returned by the upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: i64,
    #[serde(default)]
    pub cleaned_title: Option<String>,
    #[serde(default)]
    pub cleaned_text: Option<String>,
    /// `null` and a missing key both mean "no tags".
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Creation timestamp exactly as the upstream serialized it.
    pub created_utc: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl JobPost {
    /// Returns the post's tags, treating an absent list as empty.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// One page of the filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPostListResponse {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub data: Vec<JobPost>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    CreatedUtc,
    ProcessedAt,
    Score,
}

impl SortBy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::CreatedUtc => "created_utc",
            SortBy::ProcessedAt => "processed_at",
            SortBy::Score => "score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query filters for `GET /api/v1/job-posts`.
///
/// Built fresh for every request. Fields left as `None` (or set to an empty
/// string) are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    /// Comma-joined tag names.
    pub tags: Option<String>,
    /// ISO 8601 lower bound on `created_utc`.
    pub from_date: Option<String>,
    /// ISO 8601 upper bound on `created_utc`.
    pub to_date: Option<String>,
    pub has_cleaned_data: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl JobPostFilters {
    /// The request the listing page issues for `view`: only cleaned posts,
    /// newest first.
    #[must_use]
    pub fn for_view(view: &ViewState, page_size: u32) -> Self {
        let tags = view.tags_param();
        Self {
            page: Some(view.page),
            page_size: Some(page_size),
            search: Some(view.search.clone()).filter(|s| !s.is_empty()),
            tags: Some(tags).filter(|t| !t.is_empty()),
            has_cleaned_data: Some(true),
            sort_by: Some(SortBy::CreatedUtc),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    /// Returns the defined, non-empty filters as query pairs in a stable order.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        fn text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, v: Option<&str>) {
            if let Some(v) = v.filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_owned()));
            }
        }

        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        text(&mut pairs, "search", self.search.as_deref());
        text(&mut pairs, "tags", self.tags.as_deref());
        text(&mut pairs, "from_date", self.from_date.as_deref());
        text(&mut pairs, "to_date", self.to_date.as_deref());
        if let Some(flag) = self.has_cleaned_data {
            pairs.push(("has_cleaned_data", flag.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_owned()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.as_str().to_owned()));
        }
        pairs
    }
}

/// Dataset-wide counters from `GET /api/v1/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_posts: u64,
    pub posts_with_cleaned_data: u64,
    pub posts_without_cleaned_data: u64,
    #[serde(default)]
    pub oldest_post_date: Option<String>,
    #[serde(default)]
    pub newest_post_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_produce_no_query_pairs() {
        assert!(JobPostFilters::default().to_query_pairs().is_empty());
    }

    #[test]
    fn empty_strings_are_omitted() {
        let filters = JobPostFilters {
            search: Some(String::new()),
            tags: Some(String::new()),
            from_date: Some(String::new()),
            ..JobPostFilters::default()
        };
        assert!(filters.to_query_pairs().is_empty());
    }

    #[test]
    fn for_view_matches_listing_request() {
        let view = ViewState {
            page: 3,
            search: "rust".to_string(),
            tags: vec!["remote".to_string(), "senior".to_string()],
        };
        let pairs = JobPostFilters::for_view(&view, 20).to_query_pairs();
        let expected: Vec<(&str, String)> = vec![
            ("page", "3".into()),
            ("page_size", "20".into()),
            ("search", "rust".into()),
            ("tags", "remote,senior".into()),
            ("has_cleaned_data", "true".into()),
            ("sort_by", "created_utc".into()),
            ("sort_order", "desc".into()),
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn for_view_skips_empty_search_and_tags() {
        let pairs = JobPostFilters::for_view(&ViewState::default(), 20).to_query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "search" && *k != "tags"));
    }

    #[test]
    fn job_post_accepts_null_and_missing_optionals() {
        let post: JobPost = serde_json::from_value(serde_json::json!({
            "id": 7,
            "cleaned_title": null,
            "created_utc": "2024-03-01T12:00:00"
        }))
        .expect("deserialize job post");
        assert_eq!(post.id, 7);
        assert!(post.cleaned_title.is_none());
        assert!(post.cleaned_text.is_none());
        assert!(post.tags().is_empty());
        assert!(post.url.is_none());
    }

    #[test]
    fn sort_enums_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortBy::ProcessedAt).unwrap(),
            "\"processed_at\""
        );
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }
}
