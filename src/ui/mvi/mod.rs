//! Model-View-Intent (MVI) primitives shared by the stateful widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a page needs to render a widget
//! - **Intent**: a keystroke, timer tick or endpoint outcome
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Implemented by the typewriter banner and the contact form.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
