//! State for the contact form.

use crate::ui::mvi::UiState;

use super::form::{ContactForm, FormField};

/// Outcome of the last submit action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub(super) form: ContactForm,
    pub(super) status: SubmitStatus,
    pub(super) focused: FormField,
    /// Bumped on every accepted submit so stale success timers are ignored.
    pub(super) generation: u64,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The in-flight guard.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Current error text, empty unless the status is `Error`.
    pub fn error_message(&self) -> &str {
        match &self.status {
            SubmitStatus::Error { message } => message,
            _ => "",
        }
    }
}
