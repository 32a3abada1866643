//! Error types for ReportPortal API operations.

use thiserror::Error;

/// Errors that can occur during ReportPortal API operations.
#[derive(Debug, Error)]
pub enum ReportPortalError {
    /// Configuration is missing or incomplete.
    #[error("ReportPortal configuration required: {0}")]
    ConfigMissing(String),

    /// Unrecognized launch mode string.
    #[error("Invalid launch mode '{0}': expected 'default' or 'debug'")]
    InvalidMode(String),

    /// Timestamp string not in the wire format.
    #[error("Invalid timestamp '{0}': expected format like '2019-09-17T09:14:31.786Z'")]
    InvalidTimestamp(String),

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// API request failed.
    #[error("ReportPortal API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for ReportPortal operations.
pub type Result<T> = core::result::Result<T, ReportPortalError>;
