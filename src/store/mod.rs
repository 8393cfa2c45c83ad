//! Client-side state management.
//!
//! Each slice (auth, recipes, shopping list, router) has its own intent,
//! state and pure reducer. [`AppReducer`] composes them and applies the
//! route guard; [`Store`] owns the state and hands every reduced intent to
//! the effect handlers.

pub mod auth;
pub mod mvi;
pub mod recipes;
pub mod router;
pub mod shopping_list;

mod app;
mod dispatcher;

pub use app::{AppIntent, AppReducer, AppState};
pub use dispatcher::{Dispatcher, Store};
pub use router::{Route, RouterIntent};
