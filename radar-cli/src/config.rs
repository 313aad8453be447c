//! Configuration module
//!
//! Endpoint URLs and poll timing, loaded from the environment with defaults.
//! The access token is not part of this struct: it is resolved lazily by the
//! client's credential provider at query time.

use std::time::Duration;

use radar_client::{DEFAULT_API_URL, DEFAULT_DASHBOARD_URL};

/// Polling cadence between cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Global deadline for a whole batch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Upper bound accepted for the interval and the timeout
pub const MAX_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the result API
    pub api_url: String,

    /// Base URL of the dashboard, used in diagnostic links
    pub dashboard_url: String,

    /// Constant delay before each poll cycle
    pub poll_interval: Duration,

    /// Maximum wall-clock time spent polling a batch
    pub timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - RUNSCOPE_API_URL (default: https://api.runscope.com)
    /// - RUNSCOPE_DASHBOARD_URL (default: https://www.runscope.com)
    /// - RADAR_POLL_INTERVAL_SECS (default: 1)
    /// - RADAR_TIMEOUT_SECS (default: 600)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        Self {
            api_url: lookup("RUNSCOPE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            dashboard_url: lookup("RUNSCOPE_DASHBOARD_URL")
                .unwrap_or_else(|| DEFAULT_DASHBOARD_URL.to_string()),
            poll_interval: secs("RADAR_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL),
            timeout: secs("RADAR_TIMEOUT_SECS", DEFAULT_TIMEOUT),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [("api_url", &self.api_url), ("dashboard_url", &self.dashboard_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        for (name, value) in [("poll_interval", self.poll_interval), ("timeout", self.timeout)] {
            if value > MAX_DURATION {
                anyhow::bail!(
                    "{} must be at most {} seconds",
                    name,
                    MAX_DURATION.as_secs()
                );
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
