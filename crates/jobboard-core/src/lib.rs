//! Shared domain model for the job post browser.
//!
//! Both front ends (`jobboard-web` and `jobboard-cli`) build on the pieces in
//! this crate: the upstream wire types, configuration, the view-state that is
//! derived from a query string, the filter update protocol that rewrites that
//! query string, the fetch phase tracker, and the presentation helpers.

pub mod app_config;
pub mod config;
pub mod effect;
pub mod error;
pub mod present;
pub mod query;
pub mod types;
pub mod view_state;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use effect::{FetchEffect, FetchPhase, FetchTicket};
pub use error::ConfigError;
pub use query::{apply_updates, toggle_tag, ParamUpdate, QueryParams};
pub use types::{JobPost, JobPostFilters, JobPostListResponse, SortBy, SortOrder, Stats};
pub use view_state::ViewState;
