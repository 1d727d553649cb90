//! Submission lifecycle: at most one credential exchange in flight per
//! form instance. Everything runs on the single UI event loop; the only
//! suspension point is the pending gateway call.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::effects::{Navigator, Notifier};
use super::gateway::{AuthError, Session};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Owns the submission state of one form instance. Cheap to clone;
/// clones share state (single-threaded, no locks).
#[derive(Clone, Default)]
pub struct SubmissionController {
    state: Rc<RefCell<SubmissionState>>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.state.borrow(), SubmissionState::Submitting)
    }

    /// Enters `Submitting` unless an attempt is already in flight.
    fn begin(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if matches!(*state, SubmissionState::Submitting) {
            return false;
        }
        *state = SubmissionState::Submitting;
        true
    }

    fn transition(&self, next: SubmissionState) {
        *self.state.borrow_mut() = next;
    }

    /// Drives one submission attempt to completion.
    ///
    /// A call while a previous attempt is still pending is rejected, not
    /// queued: it returns `None` without ever polling `attempt`, so no
    /// second gateway call is dispatched. On success the controller
    /// passes through `Succeeded`, notifies, navigates to `destination`
    /// and settles back in `Idle`; on failure it passes through
    /// `Failed(message)`, notifies, and settles back in `Idle` so the
    /// user can resubmit immediately. The pending call has no timeout
    /// and no cancellation; it runs until the gateway settles.
    pub async fn run<F, N, V>(
        &self,
        attempt: F,
        notifier: &N,
        navigator: &V,
        success_text: &str,
        destination: &str,
    ) -> Option<Session>
    where
        F: Future<Output = Result<Session, AuthError>>,
        N: Notifier,
        V: Navigator,
    {
        if !self.begin() {
            log::debug!("submission already in flight, ignoring");
            return None;
        }

        match attempt.await {
            Ok(session) => {
                self.transition(SubmissionState::Succeeded);
                notifier.success(success_text);
                navigator.go_to(destination);
                self.transition(SubmissionState::Idle);
                Some(session)
            }
            Err(error) => {
                let message = error.to_string();
                log::warn!("submission failed: {message}");
                self.transition(SubmissionState::Failed(message.clone()));
                notifier.error(&message);
                self.transition(SubmissionState::Idle);
                None
            }
        }
    }
}
