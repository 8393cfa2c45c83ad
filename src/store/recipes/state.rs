use crate::model::Recipe;
use crate::store::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipesState {
    pub recipes: Vec<Recipe>,
    /// A fetch or store request is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for RecipesState {}

impl RecipesState {
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }
}
