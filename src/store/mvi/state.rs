/// Marker trait for store slices.
///
/// States are cloned to produce the next state, compared to detect changes,
/// and start from `Default`.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
