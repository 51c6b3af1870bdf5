//! Analysis provider error types.

use thiserror::Error;

/// Why one remote analysis attempt failed. The chain logs these and moves on;
/// they never reach an HTTP response.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    ///
    /// `retry_after_secs` is informational and only ends up in the fallback
    /// log line; the chain does not retry.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The completion carried no message content.
    #[error("completion has no content")]
    MissingContent,

    /// The completion content was not a JSON object.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider could not be constructed.
    #[error("{provider} client setup failed: {reason}")]
    Setup {
        provider: &'static str,
        reason: String,
    },
}
