//! Radar HTTP Client
//!
//! A small, type-safe HTTP client for triggering remote API test runs and
//! querying their results.
//!
//! Two calls are exposed:
//! - [`RadarClient::trigger_runs`] hits a caller-supplied trigger URL and
//!   returns the runs it started
//! - [`ResultFetcher::fetch_result`] queries the result of one run
//!
//! # Example
//!
//! ```no_run
//! use radar_client::{EnvCredentials, RadarClient, ResultFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadarClient::new("https://api.runscope.com", EnvCredentials::new());
//!
//!     let runs = client.trigger_runs("https://api.runscope.com/radar/trigger/abc").await?;
//!     for run in &runs {
//!         if let Some(result) = client.fetch_result(run).await? {
//!             println!("{}: {:?}", result.test_run_id, result.status);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod credentials;
pub mod error;
mod results;
#[cfg(test)]
mod test_support;
mod trigger;

// Re-export commonly used types
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use error::{ClientError, Result};
pub use results::ResultFetcher;

use reqwest::Client;
use std::sync::Arc;

/// Default base URL of the result API
pub const DEFAULT_API_URL: &str = "https://api.runscope.com";

/// Default base URL of the web dashboard, used for diagnostic links
pub const DEFAULT_DASHBOARD_URL: &str = "https://www.runscope.com";

/// User agent sent with every result query
pub const USER_AGENT: &str = concat!("radar-trigger/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the trigger and result endpoints
#[derive(Clone)]
pub struct RadarClient {
    /// Base URL of the result API (e.g., "https://api.runscope.com")
    base_url: String,
    /// Base URL of the dashboard (e.g., "https://www.runscope.com")
    dashboard_url: String,
    /// HTTP client instance
    client: Client,
    /// Token source for result queries
    credentials: Arc<dyn CredentialProvider>,
}

impl RadarClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the result API
    /// * `credentials` - Source of the bearer token for result queries
    ///
    /// # Example
    /// ```
    /// use radar_client::{RadarClient, StaticCredentials};
    ///
    /// let client = RadarClient::new("https://api.runscope.com", StaticCredentials("t".into()));
    /// ```
    pub fn new(base_url: impl Into<String>, credentials: impl CredentialProvider + 'static) -> Self {
        Self::with_client(base_url, Client::new(), credentials)
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        client: Client,
        credentials: impl CredentialProvider + 'static,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            client,
            credentials: Arc::new(credentials),
        }
    }

    /// Override the dashboard base URL used in diagnostic links
    pub fn with_dashboard_url(mut self, dashboard_url: impl Into<String>) -> Self {
        self.dashboard_url = dashboard_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL of the result API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the base URL of the dashboard
    pub fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> StaticCredentials {
        StaticCredentials("token".to_string())
    }

    #[test]
    fn test_client_creation() {
        let client = RadarClient::new("https://api.runscope.com", credentials());
        assert_eq!(client.base_url(), "https://api.runscope.com");
        assert_eq!(client.dashboard_url(), DEFAULT_DASHBOARD_URL);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = RadarClient::new("https://api.runscope.com/", credentials())
            .with_dashboard_url("https://dash.example.com/");
        assert_eq!(client.base_url(), "https://api.runscope.com");
        assert_eq!(client.dashboard_url(), "https://dash.example.com");
    }

    #[test]
    fn test_user_agent_is_versioned() {
        assert!(USER_AGENT.starts_with("radar-trigger/"));
    }
}
