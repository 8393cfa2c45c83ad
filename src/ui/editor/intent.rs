use crate::model::Recipe;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Start editing. `index` is the recipe being edited, `None` for a new one.
    Open {
        index: Option<usize>,
        recipe: Option<Recipe>,
    },
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Append an empty ingredient row and focus it.
    AddIngredient,
    /// Remove the focused ingredient row.
    RemoveIngredient,
    /// Submission was rejected; shows the message until the next edit.
    Invalid(String),
}

impl Intent for EditorIntent {}
