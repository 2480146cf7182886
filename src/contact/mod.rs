//! Contact form: field editing and the submission flow.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form data plus submission status
//! - `intent.rs` - Keystrokes, submit, endpoint outcomes
//! - `reducer.rs` - State transitions, including the in-flight guard
//! - `flow.rs` - Async driver: one request per accepted submit
//! - `client.rs` - HTTP transport to the contact endpoint

mod client;
mod error;
mod flow;
mod form;
mod intent;
mod reducer;
mod state;

pub use client::{ContactClient, ContactTransport};
pub use error::{
    SubmitError, ERROR_BANNER_FALLBACK, GENERIC_FAILURE_MESSAGE, NETWORK_ERROR_MESSAGE,
    SUCCESS_MESSAGE,
};
pub use flow::{ContactFlow, ContactSnapshot, SubmitOutcome};
pub use form::{ContactForm, FormField};
pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactFormState, SubmitStatus};
