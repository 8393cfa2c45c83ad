//! Side effects triggered by dispatched intents.
//!
//! Reducers stay pure; everything that touches the network, the session
//! file or a timer happens here. Effects observe each intent after it has
//! been reduced and report outcomes as new intents through the
//! [`Dispatcher`].
//!
//! Request effects are latest-wins: a second login while the first is in
//! flight aborts the first, and the same holds for fetch and store.

mod auth;
mod recipes;
mod task;

use tokio::runtime::Handle;

use crate::api::{build_http_client, ApiError, AuthClient, RecipeClient};
use crate::config::Config;
use crate::session::SessionStorage;
use crate::store::{AppIntent, AppState, Dispatcher};

use auth::AuthEffects;
use recipes::RecipeEffects;

/// Seam between the store and the outside world.
pub trait EffectHandler {
    /// Called after `intent` has been reduced into `state`.
    fn handle(&mut self, intent: &AppIntent, state: &AppState, dispatcher: &Dispatcher);
}

/// Effect handler that does nothing, for a store driven purely by reducers.
pub struct NoEffects;

impl EffectHandler for NoEffects {
    fn handle(&mut self, _intent: &AppIntent, _state: &AppState, _dispatcher: &Dispatcher) {}
}

/// Everything the production effects need.
#[derive(Clone)]
pub struct EffectContext {
    pub auth: AuthClient,
    pub recipes: RecipeClient,
    pub session: SessionStorage,
    /// Runtime that request and timer tasks are spawned on.
    pub runtime: Handle,
}

impl EffectContext {
    pub fn from_config(config: &Config, runtime: Handle) -> Result<Self, ApiError> {
        let http = build_http_client(&config.defaults)?;
        Ok(Self {
            auth: AuthClient::new(http.clone(), config.auth.clone()),
            recipes: RecipeClient::new(http, config.storage.clone()),
            session: SessionStorage::new(config.session.resolved_path()),
            runtime,
        })
    }
}

/// Production effect handlers.
pub struct Effects {
    auth: AuthEffects,
    recipes: RecipeEffects,
}

impl Effects {
    pub fn new(context: EffectContext) -> Self {
        Self {
            auth: AuthEffects::new(context.auth, context.session, context.runtime.clone()),
            recipes: RecipeEffects::new(context.recipes, context.runtime),
        }
    }
}

impl EffectHandler for Effects {
    fn handle(&mut self, intent: &AppIntent, state: &AppState, dispatcher: &Dispatcher) {
        self.auth.handle(intent, dispatcher);
        self.recipes.handle(intent, state, dispatcher);
    }
}
