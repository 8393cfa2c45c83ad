use crate::store::mvi::Reducer;
use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::{EditorField, EditorState};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { index, recipe } => EditorState::from_recipe(index, recipe.as_ref()),
            EditorIntent::Input(c) => {
                if let Some(text) = state.focused_text_mut() {
                    text.push(c);
                }
                state.error = None;
                state
            }
            EditorIntent::Backspace => {
                if let Some(text) = state.focused_text_mut() {
                    text.pop();
                }
                state.error = None;
                state
            }
            EditorIntent::FocusNext => {
                state.focus = (state.focus + 1) % state.field_count();
                state
            }
            EditorIntent::FocusPrev => {
                state.focus = if state.focus == 0 {
                    state.field_count() - 1
                } else {
                    state.focus - 1
                };
                state
            }
            EditorIntent::AddIngredient => {
                state.ingredients.push(String::new());
                state.focus = state.field_count() - 1;
                state
            }
            EditorIntent::RemoveIngredient => {
                if let EditorField::Ingredient(row) = state.focused_field() {
                    state.ingredients.remove(row);
                    state.focus = state.focus.min(state.field_count() - 1);
                }
                state
            }
            EditorIntent::Invalid(message) => {
                state.error = Some(message);
                state
            }
        }
    }
}
