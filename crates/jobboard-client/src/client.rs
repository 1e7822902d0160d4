//! HTTP client for the upstream job posts API.
//!
//! Wraps `reqwest` with typed request construction and response decoding for
//! the four read endpoints plus the health probe. Every call is exactly one
//! GET: no retries, no caching. Non-2xx responses surface as
//! [`ClientError::Status`] carrying the status and the server's `detail`.

use jobboard_core::{AppConfig, JobPost, JobPostFilters, JobPostListResponse, Stats};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiFailure, ClientError};
use crate::types::{ErrorBody, UpstreamHealth};

const JOB_POSTS_PATH: &str = "api/v1/job-posts";
const TAGS_PATH: &str = "api/v1/tags";
const STATS_PATH: &str = "api/v1/stats";
const HEALTH_PATH: &str = "health";

/// Client for the upstream job posts API.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections.
#[derive(Debug, Clone)]
pub struct JobBoardClient {
    client: Client,
    base_url: Url,
}

impl JobBoardClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Normalise to exactly one trailing slash so relative joins append to
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Creates a client from the shared application config.
    ///
    /// # Errors
    ///
    /// See [`JobBoardClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, &config.user_agent)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one page of job posts matching `filters`.
    ///
    /// Only filters that are set and non-empty are sent; with no filters the
    /// request has no query string at all.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Status`] on a non-2xx response.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body does not match
    ///   [`JobPostListResponse`].
    pub async fn list_job_posts(
        &self,
        filters: &JobPostFilters,
    ) -> Result<JobPostListResponse, ClientError> {
        let url = self.build_url(JOB_POSTS_PATH, &filters.to_query_pairs())?;
        self.get_json(url, "list job posts").await
    }

    /// Fetches a single job post by id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Status`] on a non-2xx response (404 for unknown ids).
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body does not match [`JobPost`].
    pub async fn get_job_post(&self, id: i64) -> Result<JobPost, ClientError> {
        let url = self.build_url(&format!("{JOB_POSTS_PATH}/{id}"), &[])?;
        self.get_json(url, &format!("get job post {id}")).await
    }

    /// Fetches the full, sorted tag vocabulary.
    ///
    /// # Errors
    ///
    /// Same as [`JobBoardClient::get_job_post`].
    pub async fn list_tags(&self) -> Result<Vec<String>, ClientError> {
        let url = self.build_url(TAGS_PATH, &[])?;
        self.get_json(url, "list tags").await
    }

    /// Fetches dataset statistics.
    ///
    /// # Errors
    ///
    /// Same as [`JobBoardClient::get_job_post`].
    pub async fn get_stats(&self) -> Result<Stats, ClientError> {
        let url = self.build_url(STATS_PATH, &[])?;
        self.get_json(url, "get stats").await
    }

    /// Calls the upstream health probe. A 503 (database down) is an error.
    ///
    /// # Errors
    ///
    /// Same as [`JobBoardClient::get_job_post`].
    pub async fn health(&self) -> Result<UpstreamHealth, ClientError> {
        let url = self.build_url(HEALTH_PATH, &[])?;
        self.get_json(url, "health").await
    }

    /// Joins `path` onto the base URL and appends `query` pairs, if any.
    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET, maps non-2xx to [`ClientError::Status`], and decodes the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "GET upstream");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "upstream request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_detail);
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                "upstream returned an error status"
            );
            return Err(ClientError::Status(ApiFailure {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or_else(|| status.as_str())
                    .to_string(),
                detail,
            }));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
