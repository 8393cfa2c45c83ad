use crate::model::Ingredient;
use crate::store::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingListState {
    pub ingredients: Vec<Ingredient>,
    pub edited_ingredient: Option<Ingredient>,
    pub edited_index: Option<usize>,
}

impl StoreState for ShoppingListState {}

impl ShoppingListState {
    pub fn is_editing(&self) -> bool {
        self.edited_index.is_some()
    }
}
