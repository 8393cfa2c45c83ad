use crate::store::mvi::{Intent, StoreState};

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Auth,
    Recipes,
    RecipeDetail(usize),
    RecipeNew,
    RecipeEdit(usize),
    ShoppingList,
}

impl Route {
    /// Routes that are only reachable with a logged-in user.
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Route::Recipes | Route::RecipeDetail(_) | Route::RecipeNew | Route::RecipeEdit(_)
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Auth => "Authenticate",
            Route::Recipes => "Recipes",
            Route::RecipeDetail(_) => "Recipe",
            Route::RecipeNew => "New Recipe",
            Route::RecipeEdit(_) => "Edit Recipe",
            Route::ShoppingList => "Shopping List",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouterState {
    pub route: Route,
}

impl StoreState for RouterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterIntent {
    Navigate(Route),
}

impl Intent for RouterIntent {}
