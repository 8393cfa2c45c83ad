use serde::{Deserialize, Serialize};

/// A single shopping-list or recipe line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: u32,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: u32, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.map(str::to_string),
        }
    }

    /// Human-readable form, e.g. `1 kg Rice` or `10 Tomato`.
    pub fn label(&self) -> String {
        match self.unit.as_deref().filter(|u| !u.is_empty()) {
            Some(unit) => format!("{} {} {}", self.amount, unit, self.name),
            None => format!("{} {}", self.amount, self.name),
        }
    }
}

/// A recipe as stored in the remote document store.
///
/// Recipes saved without ingredients come back from the store with the
/// field missing entirely; those decode to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    #[serde(rename = "imagePath")]
    pub image_path: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_path: image_path.into(),
            ingredients,
        }
    }
}
