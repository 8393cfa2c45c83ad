mod intent;
mod reducer;
mod state;

pub use intent::RecipeIntent;
pub use reducer::RecipeReducer;
pub use state::RecipesState;
