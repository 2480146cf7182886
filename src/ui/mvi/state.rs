/// Marker trait for widget state.
///
/// `Default` is the mounted state, `PartialEq` lets tests and callers detect
/// no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
