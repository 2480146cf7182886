use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("Phrase sequence must contain at least one phrase")]
    Empty,

    #[error("Phrase #{index} is empty")]
    EmptyPhrase { index: usize },
}

/// Fixed, non-empty list of phrases cycled by the typewriter.
///
/// Cloning shares the underlying storage. Empty phrases are rejected since a
/// zero-length phrase is simultaneously fully typed and fully deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSequence {
    phrases: Arc<[String]>,
}

impl PhraseSequence {
    pub fn new<I, S>(phrases: I) -> Result<Self, PhraseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PhraseError::Empty);
        }
        if let Some(index) = phrases.iter().position(String::is_empty) {
            return Err(PhraseError::EmptyPhrase { index });
        }
        Ok(Self {
            phrases: phrases.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, taken modulo the sequence length.
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl Default for PhraseSequence {
    fn default() -> Self {
        Self {
            phrases: crate::config::default_phrases().into(),
        }
    }
}
