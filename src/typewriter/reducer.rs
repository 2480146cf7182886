//! Reducer for the typewriter.

use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::state::{Phase, TypewriterState};

pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::Tick => {
                match state.phase {
                    Phase::Typing | Phase::PausedBeforeNext => {
                        type_next_char(&mut state);
                        state.phase = if state.is_fully_typed() {
                            Phase::HoldingFull
                        } else {
                            Phase::Typing
                        };
                    }
                    Phase::HoldingFull | Phase::Deleting => {
                        state.displayed.pop();
                        if state.displayed.is_empty() {
                            // Only place the index moves.
                            state.index = state.phrases.next_index(state.index);
                            state.phase = Phase::PausedBeforeNext;
                        } else {
                            state.phase = Phase::Deleting;
                        }
                    }
                }
                state
            }
        }
    }
}

/// Extend the displayed prefix by one character of the current phrase.
fn type_next_char(state: &mut TypewriterState) {
    let shown = state.displayed.chars().count();
    if let Some(next) = state.phrases.get(state.index).chars().nth(shown) {
        state.displayed.push(next);
    }
}
