use thiserror::Error;

/// A non-2xx response from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: u16,
    /// Canonical reason phrase for `status`, e.g. `"Internal Server Error"`.
    pub status_text: String,
    /// The `detail` field of the JSON error body, when there was one.
    pub detail: Option<String>,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API request failed: {} ({})", self.status_text, self.status)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// Errors returned by [`crate::JobBoardClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The upstream answered with a non-2xx status.
    #[error("{0}")]
    Status(ApiFailure),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status of an upstream failure, if the upstream answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status(failure) => Some(failure.status),
            _ => None,
        }
    }

    /// The upstream's `detail` message, if it sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status(failure) => failure.detail.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The single message shown to the user in place of content.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Status(failure) => failure.detail.clone().unwrap_or_else(|| {
                format!("API request failed: {}", failure.status_text)
            }),
            ClientError::Http(_) => "Failed to reach the job posts API".to_string(),
            ClientError::Deserialize { .. } => {
                "Unexpected response from the job posts API".to_string()
            }
            ClientError::InvalidBaseUrl { .. } => {
                "The job posts API URL is misconfigured".to_string()
            }
        }
    }
}
