mod intent;
mod reducer;
mod state;

pub use intent::ShoppingListIntent;
pub use reducer::ShoppingListReducer;
pub use state::ShoppingListState;
