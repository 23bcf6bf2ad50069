//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All index arithmetic and validity rules live in reducers; timers and
/// other resources are managed by the owner that dispatches into them.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. Must not have side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
