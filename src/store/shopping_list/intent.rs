use crate::model::Ingredient;
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListIntent {
    AddIngredient(Ingredient),
    /// Append every ingredient of a recipe, in order.
    AddIngredients(Vec<Ingredient>),
    /// Replace the ingredient selected by `StartEdit`.
    UpdateIngredient(Ingredient),
    /// Remove the ingredient selected by `StartEdit`.
    DeleteIngredient,
    /// Shift the amount of the selected ingredient, never below 1. The
    /// selection stays on the same row.
    AdjustAmount(i64),
    StartEdit(usize),
    StopEdit,
}

impl Intent for ShoppingListIntent {}
