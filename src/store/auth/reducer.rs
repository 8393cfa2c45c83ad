use crate::store::auth::intent::AuthIntent;
use crate::store::auth::state::AuthState;
use crate::store::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::SignupStart(_) | AuthIntent::LoginStart(_) => AuthState {
                auth_error: None,
                loading: true,
                ..state
            },
            AuthIntent::AuthenticateSuccess { user, .. } => AuthState {
                user: Some(user),
                auth_error: None,
                loading: false,
            },
            AuthIntent::AuthenticateFailure(message) => AuthState {
                user: None,
                auth_error: Some(message),
                loading: false,
            },
            AuthIntent::Logout => AuthState {
                user: None,
                ..state
            },
            AuthIntent::ClearError => AuthState {
                auth_error: None,
                ..state
            },
            AuthIntent::AutoLogin => state,
        }
    }
}
