//! Error types for the Radar client

use thiserror::Error;

use crate::credentials::TOKEN_HELP_URL;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the trigger or result endpoints
///
/// Every variant is fatal for a poll session. Conditions the loop retries
/// (result not found yet, empty payload) are not errors and never reach
/// this type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The access token is not configured
    #[error(
        "Please set the environment variable {var}. You can get an access token by going to {help}",
        help = TOKEN_HELP_URL
    )]
    MissingCredential {
        /// Name of the environment variable that was looked up
        var: String,
    },

    /// The result endpoint answered with a status other than success or 404
    #[error(
        "Result response not ok (status {status}) for {url}... Check Runscope for more information: {dashboard_url}\n\nResponse: {body}"
    )]
    UnexpectedStatus {
        status: u16,
        url: String,
        /// Human-readable history page for the run
        dashboard_url: String,
        body: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    /// Check if this error comes from local configuration rather than the network
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}
