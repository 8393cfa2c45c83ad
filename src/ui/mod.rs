//! Terminal front end.
//!
//! The view layer only reads [`crate::store::AppState`] and dispatches
//! intents; form text that is not yet submitted lives in [`app::App`].

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
