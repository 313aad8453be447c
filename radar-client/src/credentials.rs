//! Access token lookup
//!
//! The result endpoint requires a bearer token. It is resolved through a
//! [`CredentialProvider`] at every query so that a missing token surfaces as
//! an error value instead of being read ad hoc deep inside the client.

use crate::error::{ClientError, Result};

/// Environment variable holding the personal access token
pub const ACCESS_TOKEN_VAR: &str = "RUNSCOPE_ACCESS_TOKEN";

/// Where an operator can generate an access token
pub const TOKEN_HELP_URL: &str = "https://www.runscope.com/applications";

/// Source of the bearer token sent with result queries
pub trait CredentialProvider: Send + Sync {
    /// Returns the token, or [`ClientError::MissingCredential`] if none is configured
    fn bearer_token(&self) -> Result<String>;
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Reads from [`ACCESS_TOKEN_VAR`]
    pub fn new() -> Self {
        Self::from_var(ACCESS_TOKEN_VAR)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentials {
    fn bearer_token(&self) -> Result<String> {
        std::env::var(&self.var).map_err(|_| ClientError::missing_credential(&self.var))
    }
}

/// A fixed token, mostly useful in tests
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub String);

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_is_missing_credential() {
        let provider = EnvCredentials::from_var("RADAR_TEST_TOKEN_THAT_IS_NEVER_SET");
        let err = provider.bearer_token().unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingCredential { ref var } if var == "RADAR_TEST_TOKEN_THAT_IS_NEVER_SET"
        ));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials("secret".to_string());
        assert_eq!(provider.bearer_token().unwrap(), "secret");
    }
}
