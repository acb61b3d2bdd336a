//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing a search, choosing a page) or
/// completion events of backend calls (a page arrived, a request failed).
/// Reducers consume them to produce the next state.
pub trait Intent: Send + 'static {}
