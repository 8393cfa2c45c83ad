//! Login, signup, session restore and logout against a mock identity server.

mod common;

use chrono::{Duration as ChronoDuration, Utc};
use common::mock_backend::{MockBackend, MockResponse};
use common::{
    effect_store, session_path, store_session, valid_user, wait_for, wait_for_requests, API_KEY,
};
use recipebook::model::{Credentials, User};
use recipebook::session::SessionStorage;
use recipebook::store::auth::AuthIntent;
use recipebook::store::recipes::RecipeIntent;
use recipebook::store::{AppIntent, Route, RouterIntent};
use std::time::Duration;
use tempfile::TempDir;

fn is_success(intent: &AppIntent) -> bool {
    matches!(intent, AppIntent::Auth(AuthIntent::AuthenticateSuccess { .. }))
}

fn is_failure(intent: &AppIntent) -> bool {
    matches!(intent, AppIntent::Auth(AuthIntent::AuthenticateFailure(_)))
}

#[tokio::test]
async fn test_login_persists_session_and_redirects() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    backend
        .enqueue_response(MockResponse::signed_in("cook@example.com", 3600))
        .await;
    backend.enqueue_response(MockResponse::json("null")).await;

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::LoginStart(Credentials::new(
        "cook@example.com",
        "hunter22",
    )));
    assert!(store.state().auth.loading);

    let intent = wait_for(&mut store, is_success).await;
    let AppIntent::Auth(AuthIntent::AuthenticateSuccess { user, redirect }) = intent else {
        unreachable!();
    };
    assert!(redirect);
    assert_eq!(user.email, "cook@example.com");
    assert_eq!(user.id, "uid-cook@example.com");
    assert_eq!(user.token(), Some("token-cook@example.com"));
    let lifetime = user.expiration_date() - Utc::now();
    assert!(lifetime > ChronoDuration::seconds(3500));

    let state = store.state();
    assert!(!state.auth.loading);
    assert_eq!(state.route(), Route::Recipes);

    let stored = SessionStorage::new(session_path(&dir)).load().unwrap();
    assert_eq!(stored, Some(user));

    // Redirect navigation triggers the first fetch.
    wait_for(&mut store, |i| {
        matches!(i, AppIntent::Recipes(RecipeIntent::SetRecipes(_)))
    })
    .await;

    let requests = backend.captured_requests().await;
    let login = &requests[0];
    assert_eq!(login.method, "POST");
    assert_eq!(login.path, "/v1/accounts:signInWithPassword");
    assert_eq!(login.query_value("key"), Some(API_KEY));
    let body = login.json();
    assert_eq!(body["email"], "cook@example.com");
    assert_eq!(body["password"], "hunter22");
    assert_eq!(body["returnSecureToken"], true);

    let fetch = &requests[1];
    assert_eq!(fetch.method, "GET");
    assert_eq!(fetch.path, "/recipes.json");
    assert_eq!(fetch.query_value("auth"), Some("token-cook@example.com"));
}

#[tokio::test]
async fn test_second_login_cancels_first() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    backend
        .enqueue_response(MockResponse::signed_in("first@example.com", 3600).with_delay(300))
        .await;
    backend
        .enqueue_response(MockResponse::signed_in("second@example.com", 3600))
        .await;

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::LoginStart(Credentials::new("first@example.com", "pw")));
    wait_for_requests(&backend, 1).await;
    store.dispatch(AuthIntent::LoginStart(Credentials::new("second@example.com", "pw")));

    let intent = wait_for(&mut store, is_success).await;
    let AppIntent::Auth(AuthIntent::AuthenticateSuccess { user, .. }) = intent else {
        unreachable!();
    };
    assert_eq!(user.email, "second@example.com");

    // Outlive the first response's delay; it must never be applied.
    let mut late = Vec::new();
    while let Ok(Some(intent)) =
        tokio::time::timeout(Duration::from_millis(600), store.next()).await
    {
        late.push(intent);
    }
    assert!(!late.iter().any(is_success), "late intents: {late:?}");
    let state = store.state();
    assert_eq!(
        state.auth.user.as_ref().map(|u| u.email.as_str()),
        Some("second@example.com")
    );
    let stored = SessionStorage::new(session_path(&dir)).load().unwrap();
    assert_eq!(stored.map(|u| u.email), Some("second@example.com".to_string()));
}

#[tokio::test]
async fn test_signup_existing_email_reports_message() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    backend
        .enqueue_response(MockResponse::auth_error(400, "EMAIL_EXISTS"))
        .await;

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::SignupStart(Credentials::new(
        "cook@example.com",
        "hunter22",
    )));
    wait_for(&mut store, is_failure).await;

    let auth = &store.state().auth;
    assert_eq!(auth.auth_error.as_deref(), Some("This email already exists."));
    assert!(auth.user.is_none());
    assert!(!auth.loading);
    assert_eq!(store.state().route(), Route::Auth);
    assert!(!session_path(&dir).exists());

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/v1/accounts:signUp");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_codes() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    backend
        .enqueue_response(MockResponse::auth_error(400, "INVALID_PASSWORD"))
        .await;
    backend
        .enqueue_response(MockResponse::auth_error(400, "TOO_MANY_ATTEMPTS_TRY_LATER"))
        .await;

    let mut store = effect_store(&backend, &dir);
    let credentials = Credentials::new("cook@example.com", "wrong");

    store.dispatch(AuthIntent::LoginStart(credentials.clone()));
    wait_for(&mut store, is_failure).await;
    assert_eq!(
        store.state().auth.auth_error.as_deref(),
        Some("The email or password is invalid.")
    );

    store.dispatch(AuthIntent::LoginStart(credentials));
    assert!(store.state().auth.auth_error.is_none());
    wait_for(&mut store, is_failure).await;
    assert_eq!(
        store.state().auth.auth_error.as_deref(),
        Some("An Unknown error occurred!")
    );

    store.dispatch(AuthIntent::ClearError);
    assert!(store.state().auth.auth_error.is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_unknown_error() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let mut store = effect_store(&backend, &dir);
    drop(backend);
    tokio::time::sleep(Duration::from_millis(50)).await;

    store.dispatch(AuthIntent::LoginStart(Credentials::new("a@b.c", "pw")));
    wait_for(&mut store, is_failure).await;
    assert_eq!(
        store.state().auth.auth_error.as_deref(),
        Some("An Unknown error occurred!")
    );
}

#[tokio::test]
async fn test_auto_login_restores_stored_session() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let user = valid_user("cook@example.com");
    store_session(&dir, &user);
    backend.enqueue_response(MockResponse::json("[]")).await;

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::AutoLogin);

    let intent = wait_for(&mut store, is_success).await;
    assert_eq!(
        intent,
        AppIntent::Auth(AuthIntent::AuthenticateSuccess {
            user: user.clone(),
            redirect: false,
        })
    );
    assert_eq!(store.state().auth.user, Some(user));
    assert_eq!(store.state().route(), Route::Recipes);

    // Landing on the recipe screen preloads the list.
    wait_for(&mut store, |i| {
        matches!(i, AppIntent::Recipes(RecipeIntent::SetRecipes(_)))
    })
    .await;
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_auto_login_ignores_expired_session() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let expired = User::new("cook@example.com", "uid", "old", Utc::now() - ChronoDuration::minutes(1));
    store_session(&dir, &expired);

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::AutoLogin);

    assert_eq!(store.drain(), 0);
    assert!(!store.state().auth.is_authenticated());
    assert_eq!(store.state().route(), Route::Auth);
    // Left in place; the next login overwrites it.
    assert!(session_path(&dir).exists());
}

#[tokio::test]
async fn test_auto_login_without_session_does_nothing() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::AutoLogin);

    assert_eq!(store.drain(), 0);
    assert!(store.state().auth.user.is_none());
}

#[tokio::test]
async fn test_logout_clears_session_and_returns_to_auth() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    store_session(&dir, &valid_user("cook@example.com"));

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::AutoLogin);
    wait_for(&mut store, is_success).await;

    store.dispatch(AuthIntent::Logout);
    assert!(store.state().auth.user.is_none());
    assert!(!session_path(&dir).exists());

    wait_for(&mut store, |i| {
        matches!(i, AppIntent::Router(RouterIntent::Navigate(Route::Auth)))
    })
    .await;
    assert_eq!(store.state().route(), Route::Auth);
}

#[tokio::test]
async fn test_session_expiry_logs_out() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let short = User::new(
        "cook@example.com",
        "uid",
        "short-lived",
        Utc::now() + ChronoDuration::milliseconds(500),
    );
    store_session(&dir, &short);

    let mut store = effect_store(&backend, &dir);
    store.dispatch(AuthIntent::AutoLogin);
    wait_for(&mut store, is_success).await;

    wait_for(&mut store, |i| matches!(i, AppIntent::Auth(AuthIntent::Logout))).await;
    assert!(store.state().auth.user.is_none());
    assert!(!session_path(&dir).exists());
}
