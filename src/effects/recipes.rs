use tokio::runtime::Handle;

use crate::api::RecipeClient;
use crate::effects::task::TaskSlot;
use crate::store::auth::AuthIntent;
use crate::store::recipes::RecipeIntent;
use crate::store::{AppIntent, AppState, Dispatcher, Route, RouterIntent};

/// Fetch and store of the recipe document.
pub(crate) struct RecipeEffects {
    client: RecipeClient,
    runtime: Handle,
    fetch: TaskSlot,
    store: TaskSlot,
}

impl RecipeEffects {
    pub(crate) fn new(client: RecipeClient, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            fetch: TaskSlot::new("fetch-recipes"),
            store: TaskSlot::new("store-recipes"),
        }
    }

    pub(crate) fn handle(&mut self, intent: &AppIntent, state: &AppState, dispatcher: &Dispatcher) {
        match intent {
            AppIntent::Recipes(RecipeIntent::FetchRecipes) => self.fetch(state, dispatcher),
            AppIntent::Recipes(RecipeIntent::StoreRecipes) => self.store(state, dispatcher),
            // Load the list the first time the recipe screen is entered, either
            // by navigation or by a restored session landing there.
            AppIntent::Router(RouterIntent::Navigate(Route::Recipes))
            | AppIntent::Auth(AuthIntent::AuthenticateSuccess {
                redirect: false, ..
            }) => {
                if should_preload(state) {
                    dispatcher.dispatch(RecipeIntent::FetchRecipes);
                }
            }
            _ => {}
        }
    }

    fn fetch(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let client = self.client.clone();
        let token = state.auth.token().map(str::to_string);
        let dispatcher = dispatcher.clone();

        let task = self.runtime.spawn(async move {
            let intent = match client.fetch(token.as_deref()).await {
                Ok(recipes) => RecipeIntent::SetRecipes(recipes),
                Err(e) => {
                    tracing::warn!(error = %e, "Fetching recipes failed");
                    RecipeIntent::RecipesFailure(e.to_string())
                }
            };
            dispatcher.dispatch(intent);
        });
        self.fetch.replace(task);
    }

    fn store(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let client = self.client.clone();
        let token = state.auth.token().map(str::to_string);
        let recipes = state.recipes.recipes.clone();
        let dispatcher = dispatcher.clone();

        let task = self.runtime.spawn(async move {
            let intent = match client.store(token.as_deref(), &recipes).await {
                Ok(()) => RecipeIntent::RecipesStored,
                Err(e) => {
                    tracing::warn!(error = %e, "Storing recipes failed");
                    RecipeIntent::RecipesFailure(e.to_string())
                }
            };
            dispatcher.dispatch(intent);
        });
        self.store.replace(task);
    }
}

fn should_preload(state: &AppState) -> bool {
    state.route() == Route::Recipes
        && state.auth.is_authenticated()
        && state.recipes.recipes.is_empty()
        && !state.recipes.loading
}
