//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use chrono::{Duration as ChronoDuration, Utc};
use recipebook::config::{AuthConfig, Config, Defaults, SessionConfig, StorageConfig};
use recipebook::effects::{EffectContext, Effects};
use recipebook::model::{Ingredient, Recipe, User};
use recipebook::session::SessionStorage;
use recipebook::store::{AppIntent, Store};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use mock_backend::MockBackend;

pub const API_KEY: &str = "test-api-key";

/// Config pointing both endpoints at `backend`, with the session in `dir`.
pub fn config_for(backend: &MockBackend, dir: &TempDir) -> Config {
    Config {
        defaults: Defaults {
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        auth: AuthConfig {
            base_url: backend.base_url(),
            api_key: Some(API_KEY.to_string()),
        },
        storage: StorageConfig {
            database_url: backend.base_url(),
            collection: "recipes".to_string(),
        },
        session: SessionConfig {
            path: Some(session_path(dir)),
        },
    }
}

pub fn session_path(dir: &TempDir) -> PathBuf {
    dir.path().join("session.json")
}

/// Store wired to the production effects, talking to `backend`.
pub fn effect_store(backend: &MockBackend, dir: &TempDir) -> Store {
    let config = config_for(backend, dir);
    let context = EffectContext::from_config(&config, tokio::runtime::Handle::current())
        .expect("effect context");
    Store::new(Effects::new(context))
}

/// Apply effect-delivered intents until one matches, returning it.
pub async fn wait_for(store: &mut Store, matches: impl Fn(&AppIntent) -> bool) -> AppIntent {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let intent = store.next().await.expect("store closed");
            if matches(&intent) {
                return intent;
            }
        }
    })
    .await
    .expect("timed out waiting for intent")
}

/// Wait until `backend` has received at least `count` requests.
pub async fn wait_for_requests(backend: &MockBackend, count: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while backend.captured_requests().await.len() < count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("timed out waiting for requests");
}

pub fn valid_user(email: &str) -> User {
    User::new(
        email,
        format!("uid-{}", email),
        format!("token-{}", email),
        Utc::now() + ChronoDuration::hours(1),
    )
}

/// Write a session file as a previous run would have left it.
pub fn store_session(dir: &TempDir, user: &User) {
    SessionStorage::new(session_path(dir))
        .save(user)
        .expect("save session");
}

pub fn paella() -> Recipe {
    Recipe::new(
        "Paella",
        "Spanish food",
        "https://example.com/paella.jpg",
        vec![
            Ingredient::new("Rice", 1, Some("kg")),
            Ingredient::new("Tomato", 10, None),
        ],
    )
}
