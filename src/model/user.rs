use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user session.
///
/// The serialized form is the blob persisted between runs, so the field
/// names are part of the on-disk format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: String,
    #[serde(rename = "_token")]
    token: String,
    #[serde(rename = "_tokenExpirationDate")]
    token_expiration_date: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        id: impl Into<String>,
        token: impl Into<String>,
        token_expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
            token: token.into(),
            token_expiration_date,
        }
    }

    /// The ID token, or `None` once it has expired.
    pub fn token(&self) -> Option<&str> {
        self.token_at(Utc::now())
    }

    pub fn token_at(&self, now: DateTime<Utc>) -> Option<&str> {
        if now >= self.token_expiration_date {
            return None;
        }
        Some(&self.token)
    }

    pub fn expiration_date(&self) -> DateTime<Utc> {
        self.token_expiration_date
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("id", &self.id)
            .field("token", &"••••••••")
            .field("token_expiration_date", &self.token_expiration_date)
            .finish()
    }
}

/// Email/password pair entered on the auth screen.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .finish()
    }
}
