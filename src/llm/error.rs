//! Provider error types.

use thiserror::Error;

/// Errors that can occur when relaying a request to an upstream provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed before a response arrived
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned an error response
    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },
}
