/// Marker trait for intent objects.
///
/// Intents are either user actions (a key press on the recipe list) or the
/// outcome of I/O started by an effect (a login response, a fetched list).
pub trait Intent: Send + 'static {}
