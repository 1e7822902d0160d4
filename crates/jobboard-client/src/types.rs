//! Response bodies that are specific to the client rather than the domain.

use serde::Deserialize;

/// Body of the upstream `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamHealth {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

/// Error body the upstream sends with non-2xx responses: `{"detail": "..."}`.
///
/// Validation failures carry a structured `detail`; only string details are
/// surfaced.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(detail) => Some(detail),
            _ => None,
        }
    }
}
