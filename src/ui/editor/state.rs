use crate::model::{Ingredient, Recipe};
use crate::store::mvi::StoreState;

/// Fixed fields before the ingredient rows.
const FIXED_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    ImagePath,
    Description,
    Ingredient(usize),
}

/// Recipe edit form. Ingredient rows are edited as `name, amount, unit`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    /// Index of the recipe being edited, `None` when creating one.
    pub index: Option<usize>,
    pub name: String,
    pub image_path: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub focus: usize,
    pub error: Option<String>,
}

impl StoreState for EditorState {}

impl EditorState {
    pub fn from_recipe(index: Option<usize>, recipe: Option<&Recipe>) -> Self {
        let Some(recipe) = recipe else {
            return Self {
                index,
                ..Self::default()
            };
        };
        Self {
            index,
            name: recipe.name.clone(),
            image_path: recipe.image_path.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.iter().map(format_ingredient).collect(),
            focus: 0,
            error: None,
        }
    }

    pub fn field_count(&self) -> usize {
        FIXED_FIELDS + self.ingredients.len()
    }

    pub fn focused_field(&self) -> EditorField {
        match self.focus {
            0 => EditorField::Name,
            1 => EditorField::ImagePath,
            2 => EditorField::Description,
            n => EditorField::Ingredient(n - FIXED_FIELDS),
        }
    }

    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            EditorField::Name => Some(&mut self.name),
            EditorField::ImagePath => Some(&mut self.image_path),
            EditorField::Description => Some(&mut self.description),
            EditorField::Ingredient(row) => self.ingredients.get_mut(row),
        }
    }

    /// Build the recipe, or explain what is missing.
    pub fn to_recipe(&self) -> Result<Recipe, String> {
        let name = self.name.trim();
        let image_path = self.image_path.trim();
        let description = self.description.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        if image_path.is_empty() {
            return Err("Image path is required".to_string());
        }
        if description.is_empty() {
            return Err("Description is required".to_string());
        }

        let ingredients = self
            .ingredients
            .iter()
            .enumerate()
            .map(|(row, line)| {
                parse_ingredient(line).map_err(|e| format!("Ingredient {}: {}", row + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe::new(name, description, image_path, ingredients))
    }
}

fn format_ingredient(ingredient: &Ingredient) -> String {
    match &ingredient.unit {
        Some(unit) if !unit.is_empty() => {
            format!("{}, {}, {}", ingredient.name, ingredient.amount, unit)
        }
        _ => format!("{}, {}", ingredient.name, ingredient.amount),
    }
}

/// Parse an ingredient row of the form `name, amount[, unit]`.
///
/// The amount must be a positive whole number without a leading zero.
pub fn parse_ingredient(line: &str) -> Result<Ingredient, String> {
    let mut parts = line.split(',').map(str::trim);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err("name is required".to_string());
    }

    let amount_text = parts.next().unwrap_or_default();
    let amount = parse_amount(amount_text)
        .ok_or_else(|| format!("amount '{}' must be a positive whole number", amount_text))?;

    let unit = parts.next().filter(|u| !u.is_empty());
    if parts.next().is_some() {
        return Err("expected `name, amount, unit`".to_string());
    }

    Ok(Ingredient::new(name, amount, unit))
}

fn parse_amount(text: &str) -> Option<u32> {
    if text.starts_with('0') || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|&amount| amount > 0)
}
