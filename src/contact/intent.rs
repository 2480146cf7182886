//! Intents for the contact form.

use crate::ui::mvi::Intent;

use super::form::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIntent {
    /// Replace a field's value (input-change handler).
    Edit { field: FormField, value: String },

    /// Keystroke into the focused field.
    InsertChar(char),

    /// Remove the last character of the focused field.
    Backspace,

    FocusNext,
    FocusPrev,
    Focus(FormField),

    /// User submitted the form. Ignored while a submission is in flight.
    Submit,

    /// Endpoint accepted the message.
    Succeeded,

    /// Endpoint rejected the message or could not be reached.
    Failed { message: String },

    /// Success banner timer elapsed for the submission `generation`.
    SuccessExpired { generation: u64 },
}

impl Intent for ContactIntent {}
