//! Advisor client errors.

use finsee_core::error::FinseeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key available. Detected at construction, never mid-request.
    #[error("API key not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("Advisor request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The completion service answered with a non-success status.
    #[error("Advisor service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A success status carrying no usable completion.
    #[error("Advisor service returned a malformed response")]
    MalformedResponse,
}

impl From<AdvisorError> for FinseeError {
    fn from(err: AdvisorError) -> Self {
        FinseeError::Advisor(err.to_string())
    }
}
