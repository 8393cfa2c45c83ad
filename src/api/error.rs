//! Error types for the outbound HTTP clients.
//!
//! Provides structured error classification and the mapping from
//! identity-provider error codes to messages shown on the auth screen.

use thiserror::Error;

/// Shown when a failure has no recognised error code.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An Unknown error occurred!";

/// Errors that can occur while talking to the identity or storage endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required credential is missing from configuration
    #[error("{service} is not configured: {reason}")]
    NotConfigured {
        service: &'static str,
        reason: String,
    },

    /// Endpoint URL could not be built
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to build the shared HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the server or the request timed out
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status {
        status: u16,
        /// Provider error code (e.g. `EMAIL_EXISTS`), when the body carried one.
        code: Option<String>,
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for the auth screen.
    ///
    /// Only the known identity-provider codes get a specific message;
    /// everything else, including transport failures, is reported as unknown.
    pub fn auth_message(&self) -> String {
        let code = match self {
            ApiError::Status {
                code: Some(code), ..
            } => code.as_str(),
            _ => return UNKNOWN_ERROR_MESSAGE.to_string(),
        };

        // Codes may carry a detail suffix, e.g. "WEAK_PASSWORD : Password should be..."
        let code = code.split(" : ").next().unwrap_or(code).trim();
        let message = match code {
            "EMAIL_EXISTS" => "This email already exists.",
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" => "The email or password is invalid.",
            "USER_DISABLED" => "This user has been disabled by an administrator.",
            _ => UNKNOWN_ERROR_MESSAGE,
        };
        message.to_string()
    }
}

/// Extract the error code from an error response body.
///
/// Handles the identity provider's `{"error": {"message": "CODE"}}` and the
/// document store's `{"error": "Permission denied"}`.
pub(crate) fn error_code(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    if let Some(message) = error.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    error.as_str().map(str::to_string)
}
