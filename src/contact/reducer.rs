//! Reducer for the contact form.

use crate::ui::mvi::Reducer;

use super::form::ContactForm;
use super::intent::ContactIntent;
use super::state::{ContactFormState, SubmitStatus};

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Edit { field, value } => {
                state.form.set(field, value);
            }

            ContactIntent::InsertChar(c) => {
                if c != '\n' || state.focused.is_multiline() {
                    state.form.field_mut(state.focused).push(c);
                }
            }

            ContactIntent::Backspace => {
                state.form.field_mut(state.focused).pop();
            }

            ContactIntent::FocusNext => state.focused = state.focused.next(),
            ContactIntent::FocusPrev => state.focused = state.focused.prev(),
            ContactIntent::Focus(field) => state.focused = field,

            ContactIntent::Submit => {
                if !state.is_submitting() {
                    state.status = SubmitStatus::Submitting;
                    state.generation = state.generation.wrapping_add(1);
                }
            }

            ContactIntent::Succeeded => {
                if state.is_submitting() {
                    state.status = SubmitStatus::Success;
                    state.form = ContactForm::default();
                }
            }

            ContactIntent::Failed { message } => {
                // Form data is kept so the user can retry.
                if state.is_submitting() {
                    state.status = SubmitStatus::Error { message };
                }
            }

            ContactIntent::SuccessExpired { generation } => {
                if state.status == SubmitStatus::Success && state.generation == generation {
                    state.status = SubmitStatus::Idle;
                }
            }
        }
        state
    }
}
