use crate::model::User;
use crate::store::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub auth_error: Option<String>,
    pub loading: bool,
}

impl StoreState for AuthState {}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Token of the current user, if logged in and not expired.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.token())
    }
}
