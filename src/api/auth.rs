use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::{ensure_success, parse_url, ApiError};
use crate::config::{AuthConfig, CredentialStatus};
use crate::model::Credentials;

/// Which identity endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    SignIn,
}

impl AuthMode {
    fn endpoint(self) -> &'static str {
        match self {
            AuthMode::SignUp => "accounts:signUp",
            AuthMode::SignIn => "accounts:signInWithPassword",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Successful sign-up / sign-in payload.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id_token: String,
    pub email: String,
    pub refresh_token: String,
    /// Token lifetime in seconds, sent as a decimal string.
    pub expires_in: String,
    pub local_id: String,
    #[serde(default)]
    pub registered: Option<bool>,
}

impl AuthResponse {
    pub fn expires_in_seconds(&self) -> Result<i64, ApiError> {
        self.expires_in
            .trim()
            .parse()
            .map_err(|_| ApiError::Decode(format!("invalid expiresIn '{}'", self.expires_in)))
    }
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("email", &self.email)
            .field("local_id", &self.local_id)
            .field("expires_in", &self.expires_in)
            .field("registered", &self.registered)
            .finish_non_exhaustive()
    }
}

/// Client for the password-based identity endpoints.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    config: AuthConfig,
}

impl AuthClient {
    pub fn new(http: Client, config: AuthConfig) -> Self {
        Self { http, config }
    }

    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthResponse, ApiError> {
        let api_key = match self.config.resolve_api_key() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(ApiError::NotConfigured {
                    service: "Authentication",
                    reason,
                });
            }
        };

        let mut url = parse_url(format!(
            "{}/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            mode.endpoint()
        ))?;
        let endpoint = url.to_string();
        url.query_pairs_mut().append_pair("key", api_key.expose());

        let body = AuthRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };

        tracing::debug!(endpoint = %endpoint, email = %credentials.email, "Authenticating");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: endpoint.clone(),
                source: e,
            })?;

        let response = ensure_success(response).await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
