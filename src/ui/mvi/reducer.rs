use super::intent::Intent;
use super::state::UiState;

/// The only place widget state changes.
///
/// `reduce` must stay free of side effects; timers and network calls live
/// in the code that dispatches intents.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
