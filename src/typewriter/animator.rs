//! Timer task that drives the typewriter reducer.

use tokio::task::JoinHandle;

use crate::cancel::CancelToken;
use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::reducer::TypewriterReducer;
use super::state::TypewriterState;

pub struct Animator;

impl Animator {
    /// Start ticking `initial` on the current tokio runtime.
    ///
    /// The task owns the state; `sink` receives every new state after a
    /// tick. Ticks are strictly sequential: the next sleep starts only once
    /// the previous tick has been reduced and delivered.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn spawn<F>(initial: TypewriterState, mut sink: F) -> AnimatorHandle
    where
        F: FnMut(&TypewriterState) + Send + 'static,
    {
        let cancel = CancelToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut state = initial;
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(state.delay()) => {}
                }
                state = TypewriterReducer::reduce(state, TypewriterIntent::Tick);
                // cancel() may land while the tick is being reduced
                if token.is_cancelled() {
                    break;
                }
                sink(&state);
            }
            tracing::debug!(index = state.index(), "Typewriter stopped");
        });

        AnimatorHandle { cancel, task }
    }
}

/// Owner's side of a running animation.
///
/// Dropping the handle cancels the timer, so no tick can reach the sink
/// after the owning view is gone.
pub struct AnimatorHandle {
    cancel: CancelToken,
    task: JoinHandle<()>,
}

impl AnimatorHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
