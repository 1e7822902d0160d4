pub mod client;
pub mod error;
pub mod types;

pub use client::JobBoardClient;
pub use error::{ApiFailure, ClientError};
pub use types::UpstreamHealth;
