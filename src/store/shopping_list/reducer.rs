use crate::store::mvi::Reducer;
use crate::store::shopping_list::intent::ShoppingListIntent;
use crate::store::shopping_list::state::ShoppingListState;

pub struct ShoppingListReducer;

impl Reducer for ShoppingListReducer {
    type State = ShoppingListState;
    type Intent = ShoppingListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShoppingListIntent::AddIngredient(ingredient) => {
                let mut ingredients = state.ingredients;
                ingredients.push(ingredient);
                ShoppingListState {
                    ingredients,
                    ..state
                }
            }
            ShoppingListIntent::AddIngredients(added) => {
                let mut ingredients = state.ingredients;
                ingredients.extend(added);
                ShoppingListState {
                    ingredients,
                    ..state
                }
            }
            ShoppingListIntent::UpdateIngredient(ingredient) => {
                let Some(index) = editable_index(&state) else {
                    return state;
                };
                let mut ingredients = state.ingredients;
                ingredients[index] = ingredient;
                ShoppingListState {
                    ingredients,
                    edited_ingredient: None,
                    edited_index: None,
                }
            }
            ShoppingListIntent::DeleteIngredient => {
                let Some(index) = editable_index(&state) else {
                    return state;
                };
                let mut ingredients = state.ingredients;
                ingredients.remove(index);
                ShoppingListState {
                    ingredients,
                    edited_ingredient: None,
                    edited_index: None,
                }
            }
            ShoppingListIntent::AdjustAmount(delta) => {
                let Some(index) = editable_index(&state) else {
                    return state;
                };
                let mut ingredients = state.ingredients;
                let current = i64::from(ingredients[index].amount);
                let amount = (current + delta).clamp(1, i64::from(u32::MAX));
                ingredients[index].amount = u32::try_from(amount).unwrap_or(u32::MAX);
                ShoppingListState {
                    edited_ingredient: Some(ingredients[index].clone()),
                    edited_index: Some(index),
                    ingredients,
                }
            }
            ShoppingListIntent::StartEdit(index) => match state.ingredients.get(index).cloned() {
                Some(ingredient) => ShoppingListState {
                    edited_ingredient: Some(ingredient),
                    edited_index: Some(index),
                    ..state
                },
                None => state,
            },
            ShoppingListIntent::StopEdit => ShoppingListState {
                edited_ingredient: None,
                edited_index: None,
                ..state
            },
        }
    }
}

fn editable_index(state: &ShoppingListState) -> Option<usize> {
    state
        .edited_index
        .filter(|&index| index < state.ingredients.len())
}
