//! Async driver for contact form submissions.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::ui::mvi::Reducer;

use super::client::ContactTransport;
use super::error::NETWORK_ERROR_MESSAGE;
use super::form::{ContactForm, FormField};
use super::intent::ContactIntent;
use super::reducer::ContactReducer;
use super::state::{ContactFormState, SubmitStatus};

/// What a call to `ContactFlow::submit` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing was sent.
    Ignored,
    Delivered,
    Failed { message: String },
}

/// Read-only view consumed by the form renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub form_data: ContactForm,
    pub focused: FormField,
    pub is_submitting: bool,
    pub submit_status: SubmitStatus,
    pub error_message: String,
}

/// Owns the contact form state and performs submissions.
///
/// Cloning shares the same state; the TUI keeps one clone for rendering and
/// hands another to the spawned submit task.
#[derive(Clone)]
pub struct ContactFlow {
    state: Arc<Mutex<ContactFormState>>,
    transport: Arc<dyn ContactTransport>,
    success_reset: Duration,
}

impl ContactFlow {
    pub fn new(transport: Arc<dyn ContactTransport>, success_reset: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContactFormState::default())),
            transport,
            success_reset,
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.state.lock().clone()
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        let state = self.state.lock();
        ContactSnapshot {
            form_data: state.form().clone(),
            focused: state.focused(),
            is_submitting: state.is_submitting(),
            submit_status: state.status().clone(),
            error_message: state.error_message().to_string(),
        }
    }

    pub fn dispatch(&self, intent: ContactIntent) {
        apply(&self.state, intent);
    }

    /// Input-change handler.
    pub fn handle_change(&self, field: FormField, value: impl Into<String>) {
        self.dispatch(ContactIntent::Edit {
            field,
            value: value.into(),
        });
    }

    /// Submit handler.
    ///
    /// Sends exactly one request unless a submission is already in flight,
    /// in which case this returns `Ignored` without touching the network.
    /// The status always leaves `Submitting`, even if this future is dropped
    /// mid-request.
    ///
    /// Must be called from within a tokio runtime context.
    pub async fn submit(&self) -> SubmitOutcome {
        let (payload, generation) = {
            let mut state = self.state.lock();
            if state.is_submitting() {
                tracing::debug!("Submit ignored: submission already in flight");
                return SubmitOutcome::Ignored;
            }
            *state = ContactReducer::reduce(std::mem::take(&mut *state), ContactIntent::Submit);
            (state.form().clone(), state.generation())
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(%submission_id, "Submitting contact form");

        let mut guard = InFlightGuard {
            state: Arc::clone(&self.state),
            armed: true,
        };
        let result = self.transport.send(&payload).await;
        guard.armed = false;

        match result {
            Ok(()) => {
                tracing::info!(%submission_id, "Contact form delivered");
                self.dispatch(ContactIntent::Succeeded);
                self.schedule_success_reset(generation);
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(%submission_id, error = %err, "Contact form submission failed");
                let message = err.user_message();
                self.dispatch(ContactIntent::Failed {
                    message: message.clone(),
                });
                SubmitOutcome::Failed { message }
            }
        }
    }

    fn schedule_success_reset(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.success_reset;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            apply(&state, ContactIntent::SuccessExpired { generation });
        });
    }
}

fn apply(state: &Mutex<ContactFormState>, intent: ContactIntent) {
    let mut state = state.lock();
    *state = ContactReducer::reduce(std::mem::take(&mut *state), intent);
}

/// Resolves a submission that was abandoned before the transport returned.
struct InFlightGuard {
    state: Arc<Mutex<ContactFormState>>,
    armed: bool,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.armed {
            apply(
                &self.state,
                ContactIntent::Failed {
                    message: NETWORK_ERROR_MESSAGE.to_string(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SubmitError;
    use async_trait::async_trait;

    struct Pending;

    #[async_trait]
    impl ContactTransport for Pending {
        async fn send(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_submit_never_stays_submitting() {
        let flow = ContactFlow::new(Arc::new(Pending), Duration::from_secs(5));
        flow.handle_change(FormField::Name, "Ada");

        let result =
            tokio::time::timeout(Duration::from_millis(10), flow.submit()).await;
        assert!(result.is_err());

        let snapshot = flow.snapshot();
        assert!(!snapshot.is_submitting);
        assert_eq!(snapshot.error_message, NETWORK_ERROR_MESSAGE);
        assert_eq!(snapshot.form_data.name, "Ada");
    }
}
