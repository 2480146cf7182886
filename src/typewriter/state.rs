//! State for the typewriter.

use std::time::Duration;

use crate::config::TypewriterConfig;
use crate::ui::mvi::UiState;

use super::phrases::PhraseSequence;

/// Delays between ticks for each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
    pub pause: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self::from(&TypewriterConfig::default())
    }
}

impl From<&TypewriterConfig> for TypewriterTimings {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(config.type_ms),
            delete_delay: Duration::from_millis(config.delete_ms),
            hold: Duration::from_millis(config.hold_ms),
            pause: Duration::from_millis(config.pause_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Revealing the current phrase one character per tick.
    #[default]
    Typing,
    /// Phrase fully shown; the next tick starts deleting.
    HoldingFull,
    /// Removing one character per tick.
    Deleting,
    /// Text is empty and the index already points at the next phrase.
    PausedBeforeNext,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypewriterState {
    pub(super) phrases: PhraseSequence,
    pub(super) index: usize,
    pub(super) displayed: String,
    pub(super) phase: Phase,
    pub(super) timings: TypewriterTimings,
}

impl UiState for TypewriterState {}

impl TypewriterState {
    /// Mount state: first phrase, nothing displayed, typing.
    pub fn new(phrases: PhraseSequence, timings: TypewriterTimings) -> Self {
        Self {
            phrases,
            index: 0,
            displayed: String::new(),
            phase: Phase::Typing,
            timings,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrases(&self) -> &PhraseSequence {
        &self.phrases
    }

    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.index)
    }

    /// The mode flag: true only while characters are being removed.
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn is_fully_typed(&self) -> bool {
        self.displayed == self.current_phrase()
    }

    /// Wait before the next tick.
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timings.type_delay,
            Phase::HoldingFull => self.timings.hold,
            Phase::Deleting => self.timings.delete_delay,
            Phase::PausedBeforeNext => self.timings.pause,
        }
    }
}
