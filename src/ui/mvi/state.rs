//! Base trait for view state in the MVI architecture.

/// Marker trait for view state objects.
///
/// A state holds everything a screen needs to render: the last good
/// records, the current selection and any message to show.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
