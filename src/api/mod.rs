//! HTTP clients for the identity provider and the recipe document store.

mod auth;
mod error;
mod recipes;

pub use auth::{AuthClient, AuthMode, AuthResponse};
pub use error::{ApiError, UNKNOWN_ERROR_MESSAGE};
pub use recipes::RecipeClient;

use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::config::Defaults;

/// Build the HTTP client shared by both endpoints.
pub fn build_http_client(defaults: &Defaults) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(defaults.connect_timeout_seconds.into()))
        .timeout(Duration::from_secs(defaults.timeout_seconds.into()))
        .build()
        .map_err(ApiError::Client)
}

fn parse_url(raw: String) -> Result<Url, ApiError> {
    Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
        reason: e.to_string(),
        url: raw,
    })
}

/// Turn a non-success response into `ApiError::Status`.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let code = error::error_code(&body);
    let message = code
        .clone()
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        code,
        message,
    })
}
