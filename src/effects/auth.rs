use chrono::{DateTime, TimeDelta, Utc};
use tokio::runtime::Handle;

use crate::api::{ApiError, AuthClient, AuthMode, AuthResponse};
use crate::effects::task::TaskSlot;
use crate::model::{Credentials, User};
use crate::session::SessionStorage;
use crate::store::auth::AuthIntent;
use crate::store::{AppIntent, Dispatcher, Route};

/// Login, signup, session restore and logout side effects.
pub(crate) struct AuthEffects {
    client: AuthClient,
    session: SessionStorage,
    runtime: Handle,
    request: TaskSlot,
    logout_timer: TaskSlot,
}

impl AuthEffects {
    pub(crate) fn new(client: AuthClient, session: SessionStorage, runtime: Handle) -> Self {
        Self {
            client,
            session,
            runtime,
            request: TaskSlot::new("auth-request"),
            logout_timer: TaskSlot::new("logout-timer"),
        }
    }

    pub(crate) fn handle(&mut self, intent: &AppIntent, dispatcher: &Dispatcher) {
        let AppIntent::Auth(intent) = intent else {
            return;
        };

        match intent {
            AuthIntent::SignupStart(credentials) => {
                self.authenticate(AuthMode::SignUp, credentials.clone(), dispatcher)
            }
            AuthIntent::LoginStart(credentials) => {
                self.authenticate(AuthMode::SignIn, credentials.clone(), dispatcher)
            }
            AuthIntent::AutoLogin => self.auto_login(dispatcher),
            AuthIntent::Logout => self.logout(dispatcher),
            AuthIntent::AuthenticateSuccess { user, redirect } => {
                self.arm_logout_timer(user, dispatcher);
                if *redirect {
                    dispatcher.dispatch(Route::Recipes);
                }
            }
            AuthIntent::AuthenticateFailure(_) | AuthIntent::ClearError => {}
        }
    }

    fn authenticate(&mut self, mode: AuthMode, credentials: Credentials, dispatcher: &Dispatcher) {
        let client = self.client.clone();
        let session = self.session.clone();
        let dispatcher = dispatcher.clone();

        let task = self.runtime.spawn(async move {
            let result = client
                .authenticate(mode, &credentials)
                .await
                .and_then(|response| user_from_response(&response, Utc::now()));

            let intent = match result {
                Ok(user) => {
                    if let Err(e) = session.save(&user) {
                        tracing::warn!(error = %e, "Failed to persist session");
                    }
                    tracing::info!(email = %user.email, ?mode, "Authenticated");
                    AuthIntent::AuthenticateSuccess {
                        user,
                        redirect: true,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, ?mode, "Authentication failed");
                    AuthIntent::AuthenticateFailure(e.auth_message())
                }
            };
            dispatcher.dispatch(intent);
        });

        self.request.replace(task);
    }

    fn auto_login(&mut self, dispatcher: &Dispatcher) {
        let user = match self.session.load() {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!("No stored session");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                return;
            }
        };

        if user.token().is_none() {
            tracing::debug!(email = %user.email, "Stored session expired");
            return;
        }

        tracing::info!(email = %user.email, "Restored session");
        dispatcher.dispatch(AuthIntent::AuthenticateSuccess {
            user,
            redirect: false,
        });
    }

    fn logout(&mut self, dispatcher: &Dispatcher) {
        self.logout_timer.cancel();
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        tracing::info!("Logged out");
        dispatcher.dispatch(Route::Auth);
    }

    /// Log out automatically once the user's token expires.
    fn arm_logout_timer(&mut self, user: &User, dispatcher: &Dispatcher) {
        let remaining = (user.expiration_date() - Utc::now())
            .to_std()
            .unwrap_or_default();
        let dispatcher = dispatcher.clone();

        tracing::debug!(seconds = remaining.as_secs(), "Logout timer armed");
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(remaining).await;
            tracing::info!("Session expired");
            dispatcher.dispatch(AuthIntent::Logout);
        });
        self.logout_timer.replace(task);
    }
}

/// Build the session user from a sign-in response received at `now`.
pub(crate) fn user_from_response(
    response: &AuthResponse,
    now: DateTime<Utc>,
) -> Result<User, ApiError> {
    let seconds = response.expires_in_seconds()?;
    let expiration = TimeDelta::try_seconds(seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| ApiError::Decode(format!("expiresIn out of range: {}", seconds)))?;

    Ok(User::new(
        response.email.clone(),
        response.local_id.clone(),
        response.id_token.clone(),
        expiration,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(expires_in: &str) -> AuthResponse {
        AuthResponse {
            id_token: "id-token".to_string(),
            email: "cook@example.com".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: expires_in.to_string(),
            local_id: "uid-1".to_string(),
            registered: Some(true),
        }
    }

    #[test]
    fn expiration_is_now_plus_lifetime() {
        let now = Utc::now();
        let user = user_from_response(&response("3600"), now).unwrap();
        assert_eq!(user.expiration_date(), now + TimeDelta::seconds(3600));
        assert_eq!(user.id, "uid-1");
        assert_eq!(user.token_at(now), Some("id-token"));
    }

    #[test]
    fn absurd_lifetime_is_rejected() {
        let now = Utc::now();
        let result = user_from_response(&response(&i64::MAX.to_string()), now);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
