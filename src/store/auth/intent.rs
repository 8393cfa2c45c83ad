use crate::model::{Credentials, User};
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    /// Create an account; the effect posts to the sign-up endpoint.
    SignupStart(Credentials),
    /// Sign in with email and password.
    LoginStart(Credentials),
    /// A session was established, either by a fresh login or restored from disk.
    /// `redirect` is false for restored sessions so the current screen stays.
    AuthenticateSuccess { user: User, redirect: bool },
    /// Login or signup failed; carries the message shown to the user.
    AuthenticateFailure(String),
    Logout,
    ClearError,
    /// Restore the persisted session, if any.
    AutoLogin,
}

impl Intent for AuthIntent {}
