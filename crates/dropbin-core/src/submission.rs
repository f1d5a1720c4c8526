//! Submission Controller: the idle -> pending -> settled lifecycle.
//!
//! The controller never performs the upload itself. The caller asks
//! for a [`SubmitTicket`] with [`SubmissionController::begin`], runs the
//! remote operation, and hands the outcome back to
//! [`SubmissionController::finish`] together with the ticket. Tickets
//! carry a generation number so results that arrive after
//! [`SubmissionController::abandon`] (or for a superseded attempt) are
//! discarded instead of clobbering newer state.

use crate::messages::{Locale, Message};
use crate::types::{StatusKind, SubmissionState, UploadError, UploadedBlobMeta};

/// Proof that a submission was started; required to report its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a started submission must be finished with its ticket"]
pub struct SubmitTicket {
    generation: u64,
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready to submit.
    Idle,
    /// Waiting for the remote operation of the given generation.
    Pending(u64),
    /// The last submission finished; its status is on display.
    Settled,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Every file was stored.
    Succeeded(Vec<UploadedBlobMeta>),
    /// The batch failed; the files should stay selected for a retry.
    Failed(UploadError),
}

/// Drives the status shown for submissions of one widget instance.
#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    generation: u64,
    state: SubmissionState,
}

impl SubmissionController {
    /// A fresh, idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            state: SubmissionState::idle(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a submission is in flight (the submit control is disabled).
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending(_))
    }

    /// Status of the most recent attempt.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a submission of `batch_len` files.
    ///
    /// Returns `None`, changing nothing, when the batch is empty or a
    /// submission is already pending. Otherwise the previous status is
    /// replaced by the idle state until the new outcome arrives.
    pub fn begin(&mut self, batch_len: usize) -> Option<SubmitTicket> {
        if batch_len == 0 || self.is_pending() {
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Pending(self.generation);
        self.state = SubmissionState::idle();
        Some(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Report the outcome of the submission identified by `ticket`.
    ///
    /// Returns `None` and ignores the outcome when the ticket is stale.
    pub fn finish(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<Vec<UploadedBlobMeta>, UploadError>,
        locale: Locale,
    ) -> Option<Settlement> {
        if self.phase != Phase::Pending(ticket.generation) {
            return None;
        }
        self.phase = Phase::Settled;
        let settlement = match outcome {
            Ok(blobs) => {
                self.state =
                    SubmissionState::new(StatusKind::Success, locale.text(Message::UploadSucceeded));
                Settlement::Succeeded(blobs)
            }
            Err(error) => {
                self.state =
                    SubmissionState::new(StatusKind::Danger, locale.text(Message::UploadFailed));
                Settlement::Failed(error)
            }
        };
        Some(settlement)
    }

    /// Invalidate any in-flight submission and return to idle.
    pub fn abandon(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }

    /// The user changed the selection; a settled controller becomes idle.
    ///
    /// The status message stays until the next attempt replaces it.
    pub fn note_collection_changed(&mut self) {
        if self.phase == Phase::Settled {
            self.phase = Phase::Idle;
        }
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn blob(name: &str) -> UploadedBlobMeta {
        UploadedBlobMeta {
            url: format!("http://localhost/blobs/{name}"),
            pathname: name.to_string(),
            content_type: "image/png".to_string(),
            size: 1,
        }
    }

    #[test]
    fn empty_batch_never_starts() {
        let mut c = SubmissionController::new();
        assert_eq!(c.begin(0), None);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn begin_enters_pending() {
        let mut c = SubmissionController::new();
        assert!(c.begin(2).is_some());
        assert!(c.is_pending());
    }

    #[test]
    fn no_double_submission_while_pending() {
        let mut c = SubmissionController::new();
        let _first = c.begin(1).unwrap();
        assert_eq!(c.begin(1), None);
    }

    #[test]
    fn success_sets_success_state() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        let settled = c.finish(ticket, Ok(vec![blob("a.png")]), Locale::Es);
        assert_eq!(settled, Some(Settlement::Succeeded(vec![blob("a.png")])));
        assert_eq!(c.phase(), Phase::Settled);
        assert_eq!(c.state().kind, StatusKind::Success);
        assert_eq!(c.state().message, "Archivos cargados con éxito.");
    }

    #[test]
    fn failure_sets_danger_state() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        let err = UploadError::Transport("offline".to_string());
        let settled = c.finish(ticket, Err(err.clone()), Locale::En);
        assert_eq!(settled, Some(Settlement::Failed(err)));
        assert_eq!(c.state().kind, StatusKind::Danger);
        assert_eq!(c.state().message, "Failed to upload the files.");
    }

    #[test]
    fn new_attempt_replaces_previous_status() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        let _ = c.finish(ticket, Err(UploadError::Decode("x".into())), Locale::Es);
        assert!(c.state().is_visible());

        let _retry = c.begin(1).unwrap();
        assert_eq!(c.state(), &SubmissionState::idle());
    }

    #[test]
    fn late_result_after_abandon_is_discarded() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        c.abandon();
        assert_eq!(c.finish(ticket, Ok(vec![]), Locale::Es), None);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.state(), &SubmissionState::idle());
    }

    #[test]
    fn stale_ticket_cannot_settle_newer_attempt() {
        let mut c = SubmissionController::new();
        let old = c.begin(1).unwrap();
        c.abandon();
        let new = c.begin(1).unwrap();
        assert_eq!(c.finish(old, Ok(vec![]), Locale::Es), None);
        assert!(c.is_pending());
        assert!(c.finish(new, Ok(vec![]), Locale::Es).is_some());
    }

    #[test]
    fn finishing_twice_is_ignored() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        assert!(c.finish(ticket, Ok(vec![]), Locale::Es).is_some());
        assert_eq!(c.finish(ticket, Ok(vec![]), Locale::Es), None);
    }

    #[test]
    fn collection_change_returns_settled_to_idle() {
        let mut c = SubmissionController::new();
        let ticket = c.begin(1).unwrap();
        let _ = c.finish(ticket, Ok(vec![]), Locale::Es);
        c.note_collection_changed();
        assert_eq!(c.phase(), Phase::Idle);
        // The message survives until the next attempt.
        assert_eq!(c.state().kind, StatusKind::Success);
    }

    #[test]
    fn collection_change_does_not_cancel_pending() {
        let mut c = SubmissionController::new();
        let _ticket = c.begin(1).unwrap();
        c.note_collection_changed();
        assert!(c.is_pending());
    }
}
