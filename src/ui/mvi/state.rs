/// Marker for renderable UI state.
///
/// `Default` lets dispatchers swap the state out with `std::mem::take`
/// while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
