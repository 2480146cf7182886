//! Typewriter animation for the home page banner.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase, displayed prefix and timing
//! - `intent.rs` - Timer ticks
//! - `reducer.rs` - Pure per-tick transitions
//! - `animator.rs` - Timer task driving the reducer, cancellable
//!
//! ```text
//! Typing ──full──→ HoldingFull ──hold──→ Deleting ──empty──→ PausedBeforeNext
//!    ↑                                                              │
//!    └──────────────────────── next phrase ─────────────────────────┘
//! ```

mod animator;
mod intent;
mod phrases;
mod reducer;
mod state;

pub use animator::{Animator, AnimatorHandle};
pub use intent::TypewriterIntent;
pub use phrases::{PhraseError, PhraseSequence};
pub use reducer::TypewriterReducer;
pub use state::{Phase, TypewriterState, TypewriterTimings};
