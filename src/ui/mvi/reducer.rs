//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// Reducers never touch the network. Whether a state change needs a backend
/// call is decided by the owner of the state after reducing.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition: `(State, Intent) -> State`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
