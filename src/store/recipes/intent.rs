use crate::model::Recipe;
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeIntent {
    /// Replace the whole list (result of a fetch).
    SetRecipes(Vec<Recipe>),
    FetchRecipes,
    /// Upload the current list to the document store.
    StoreRecipes,
    RecipesStored,
    RecipesFailure(String),
    AddRecipe(Recipe),
    UpdateRecipe { index: usize, recipe: Recipe },
    DeleteRecipe(usize),
}

impl Intent for RecipeIntent {}
