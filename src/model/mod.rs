//! Domain types shared by the stores, the HTTP clients and the UI.

mod recipe;
mod user;

pub use recipe::{Ingredient, Recipe};
pub use user::{Credentials, User};
