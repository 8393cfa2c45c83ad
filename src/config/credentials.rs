//! Credential resolution from configuration.
//!
//! The identity endpoint needs a web API key. It comes from the
//! `RECIPEBOOK_API_KEY` environment variable when set, else from the config.

use super::types::AuthConfig;

/// Environment variable overriding `auth.api_key`.
pub const API_KEY_ENV: &str = "RECIPEBOOK_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of API key resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured {
        reason: String,
    },
}

impl AuthConfig {
    /// Resolve the API key, preferring the environment variable.
    ///
    /// Called on demand and not cached.
    pub fn resolve_api_key(&self) -> CredentialStatus {
        self.resolve_api_key_with(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn resolve_api_key_with(&self, env_value: Option<String>) -> CredentialStatus {
        let candidate = env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()));

        match candidate {
            Some(key) => CredentialStatus::Configured(SecureString::new(key)),
            None => CredentialStatus::Unconfigured {
                reason: format!("set auth.api_key or {}", API_KEY_ENV),
            },
        }
    }
}
