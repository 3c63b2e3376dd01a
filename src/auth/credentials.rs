//! Credential management for CTS API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the CTS API key.
pub const DEFAULT_API_KEY_VAR: &str = "CTS_API_KEY";

/// API credentials: the single key issued by the CTS open data portal.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the API key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Whether the key is empty and therefore unusable.
    pub fn is_empty(&self) -> bool {
        self.api_key.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from an environment variable.
///
/// By default, reads from `CTS_API_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from the default environment variable.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(DEFAULT_API_KEY_VAR)
    }

    /// Try to create credentials from a custom environment variable name.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env_var(key_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("super_secret_key");
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key(), "key");
        assert!(!creds.is_empty());
        assert!(StaticCredentials::new("").get_credentials().is_empty());
    }

    #[test]
    fn test_env_credentials_missing_var() {
        assert!(EnvCredentials::try_from_env_var("CTS_API_KEY_SURELY_UNSET_4f1a").is_none());
    }
}
