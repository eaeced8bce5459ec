//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a remote data source.
///
/// None of these are retried locally. They propagate to whoever asked for
/// the data, which decides how a failure is surfaced.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} request failed with status {status}")]
    HttpStatus {
        /// The provider that rejected the request
        provider: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The provider answered, but the payload was not what we expected.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl MarketDataError {
    /// Returns true for errors caused by the transport rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}
