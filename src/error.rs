//! Error types for the CTS client library.

use thiserror::Error;

/// The main error type for all CTS client operations.
///
/// Every failure is terminal for the call that produced it. The client never
/// retries on its own; callers decide what to do with a failure.
#[derive(Error, Debug)]
pub enum CtsError {
    /// The client could not be configured (empty API key, bad base URL, ...)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// No usable API key at call time
    #[error("API key missing")]
    CredentialMissing,

    /// An empty endpoint path was passed to the request layer
    #[error("Request missing")]
    RequestMissing,

    /// A required endpoint parameter was absent or empty
    #[error("Settings missing: {0}")]
    SettingsMissing(&'static str),

    /// The API answered with a status other than 200
    #[error("API connection failed with HTTP {status}")]
    ConnectionFailure {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// No complete response before the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The body of a 200 response is not valid JSON
    #[error("JSON invalid: {0}")]
    InvalidResponse(String),

    /// Transport failure reported by the HTTP stack
    #[error("Network error: {0}")]
    Network(#[from] reqwest_middleware::Error),

    /// HTTP client error outside of the middleware chain
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

impl CtsError {
    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Check if the API answered with a non-200 status.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailure { .. })
    }

    /// Check if the error was raised before any network call was made.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::CredentialMissing
                | Self::RequestMissing
                | Self::SettingsMissing(_)
                | Self::Url(_)
        )
    }
}
