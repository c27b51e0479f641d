//! Error types
//!
//! Only catalog retrieval and config parsing can fail. Cart constraint
//! violations are not errors; see [`crate::domain::Outcome`].

use thiserror::Error;

/// Catalog retrieval failed. Recovery is a manual reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The catalog service answered with a non-2xx status.
    #[error("catalog service returned status {0}")]
    Status(u16),

    /// The response body was not a valid product list.
    #[error("malformed catalog payload: {0}")]
    Malformed(String),
}

/// Storefront configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
}
