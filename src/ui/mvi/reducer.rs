use super::intent::Intent;
use super::state::UiState;

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return the next one. Intents that do
    /// not apply must hand the state back unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
