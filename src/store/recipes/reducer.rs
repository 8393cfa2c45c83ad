use crate::store::mvi::Reducer;
use crate::store::recipes::intent::RecipeIntent;
use crate::store::recipes::state::RecipesState;

pub struct RecipeReducer;

impl Reducer for RecipeReducer {
    type State = RecipesState;
    type Intent = RecipeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RecipeIntent::SetRecipes(recipes) => RecipesState {
                recipes,
                loading: false,
                error: None,
            },
            RecipeIntent::FetchRecipes | RecipeIntent::StoreRecipes => RecipesState {
                loading: true,
                error: None,
                ..state
            },
            RecipeIntent::RecipesStored => RecipesState {
                loading: false,
                ..state
            },
            RecipeIntent::RecipesFailure(message) => RecipesState {
                loading: false,
                error: Some(message),
                ..state
            },
            RecipeIntent::AddRecipe(recipe) => {
                let mut recipes = state.recipes;
                recipes.push(recipe);
                RecipesState { recipes, ..state }
            }
            RecipeIntent::UpdateRecipe { index, recipe } => {
                let mut recipes = state.recipes;
                if let Some(slot) = recipes.get_mut(index) {
                    *slot = recipe;
                }
                RecipesState { recipes, ..state }
            }
            RecipeIntent::DeleteRecipe(index) => {
                let mut recipes = state.recipes;
                if index < recipes.len() {
                    recipes.remove(index);
                }
                RecipesState { recipes, ..state }
            }
        }
    }
}
