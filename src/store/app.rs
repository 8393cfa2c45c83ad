//! Root state and reducer composing every slice.

use crate::store::auth::{AuthIntent, AuthReducer, AuthState};
use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::recipes::{RecipeIntent, RecipeReducer, RecipesState};
use crate::store::router::{Route, RouterIntent, RouterState};
use crate::store::shopping_list::{ShoppingListIntent, ShoppingListReducer, ShoppingListState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub recipes: RecipesState,
    pub shopping_list: ShoppingListState,
    pub router: RouterState,
}

impl StoreState for AppState {}

impl AppState {
    pub fn route(&self) -> Route {
        self.router.route
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    Auth(AuthIntent),
    Recipes(RecipeIntent),
    ShoppingList(ShoppingListIntent),
    Router(RouterIntent),
}

impl Intent for AppIntent {}

impl From<AuthIntent> for AppIntent {
    fn from(intent: AuthIntent) -> Self {
        AppIntent::Auth(intent)
    }
}

impl From<RecipeIntent> for AppIntent {
    fn from(intent: RecipeIntent) -> Self {
        AppIntent::Recipes(intent)
    }
}

impl From<ShoppingListIntent> for AppIntent {
    fn from(intent: ShoppingListIntent) -> Self {
        AppIntent::ShoppingList(intent)
    }
}

impl From<RouterIntent> for AppIntent {
    fn from(intent: RouterIntent) -> Self {
        AppIntent::Router(intent)
    }
}

impl From<Route> for AppIntent {
    fn from(route: Route) -> Self {
        AppIntent::Router(RouterIntent::Navigate(route))
    }
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState {
            mut auth,
            mut recipes,
            mut shopping_list,
            mut router,
        } = state;

        match intent {
            AppIntent::Auth(intent) => auth = AuthReducer::reduce(auth, intent),
            AppIntent::Recipes(intent) => recipes = RecipeReducer::reduce(recipes, intent),
            AppIntent::ShoppingList(intent) => {
                shopping_list = ShoppingListReducer::reduce(shopping_list, intent)
            }
            AppIntent::Router(RouterIntent::Navigate(route)) => router.route = route,
        }

        router.route = guard_route(router.route, &auth, &recipes);

        AppState {
            auth,
            recipes,
            shopping_list,
            router,
        }
    }
}

/// Resolve the route that may actually be shown for the given state.
fn guard_route(route: Route, auth: &AuthState, recipes: &RecipesState) -> Route {
    let authenticated = auth.is_authenticated();
    if route.requires_auth() && !authenticated {
        return Route::Auth;
    }
    match route {
        Route::Auth if authenticated => Route::Recipes,
        Route::RecipeDetail(index) | Route::RecipeEdit(index) if recipes.get(index).is_none() => {
            Route::Recipes
        }
        other => other,
    }
}
