//! Intents for the typewriter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterIntent {
    /// The delay returned by `TypewriterState::delay` has elapsed.
    Tick,
}

impl Intent for TypewriterIntent {}
