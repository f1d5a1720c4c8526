//! Owned state of one upload widget.

use crate::collection::{CollectionError, FileCollection, FileStore};
use crate::messages::Locale;
use crate::submission::{Settlement, SubmissionController, SubmitTicket};
use crate::types::{FileMeta, SubmissionState, UploadError, UploadedBlobMeta};
use crate::validate::{self, Rejection, UploadLimits};

/// Everything one widget instance owns: the selected files, the
/// rejections of the latest batch, and the submission lifecycle.
///
/// Each widget builds its own session, so several widgets on one page
/// stay independent.
#[derive(Debug)]
pub struct UploadSession<F> {
    store: FileStore<F>,
    rejections: Vec<Rejection>,
    controller: SubmissionController,
    limits: UploadLimits,
    locale: Locale,
}

impl<F: Clone> UploadSession<F> {
    /// An empty session.
    #[must_use]
    pub fn new(limits: UploadLimits, locale: Locale) -> Self {
        Self {
            store: FileStore::default(),
            rejections: Vec::new(),
            controller: SubmissionController::new(),
            limits,
            locale,
        }
    }

    /// Currently selected files.
    #[must_use]
    pub fn files(&self) -> &FileCollection<F> {
        self.store.files()
    }

    /// Rejections of the most recent batch.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Status of the most recent submission.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        self.controller.state()
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    /// Configured limits.
    #[must_use]
    pub const fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    /// Display language.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate a selected batch before any file is read.
    ///
    /// Replaces the rejection list with this batch's rejections and
    /// returns the accepted candidates, in selection order, for the
    /// caller to load and [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::SubmissionPending`] while a submission
    /// is in flight; the rejection list is left as it was.
    pub fn screen<P: FileMeta>(
        &mut self,
        batch: impl IntoIterator<Item = P>,
    ) -> Result<Vec<P>, CollectionError> {
        self.ensure_unlocked()?;
        let split = validate::partition(batch, &self.limits, self.locale);
        self.record_rejections(split.rejected);
        Ok(split.accepted)
    }

    /// Append already-validated files.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::SubmissionPending`] while a submission
    /// is in flight.
    pub fn add(&mut self, files: impl IntoIterator<Item = F>) -> Result<(), CollectionError> {
        self.ensure_unlocked()?;
        self.store.add(files);
        self.controller.note_collection_changed();
        Ok(())
    }

    /// Replace the rejection list.
    pub fn record_rejections(&mut self, rejections: Vec<Rejection>) {
        self.rejections = rejections;
    }

    /// Dismiss the rejection list.
    pub fn clear_rejections(&mut self) {
        self.rejections.clear();
    }

    /// Remove the file at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] for an invalid index
    /// and [`CollectionError::SubmissionPending`] while a submission is
    /// in flight.
    pub fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        self.ensure_unlocked()?;
        self.store.remove(index)?;
        self.controller.note_collection_changed();
        Ok(())
    }

    /// Clear the selection back to its initial value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::SubmissionPending`] while a submission
    /// is in flight.
    pub fn reset(&mut self) -> Result<(), CollectionError> {
        self.ensure_unlocked()?;
        self.store.reset();
        self.controller.note_collection_changed();
        Ok(())
    }

    /// Edits are refused between `begin_submit` and `complete`; a
    /// success then clears exactly the uploaded snapshot.
    const fn ensure_unlocked(&self) -> Result<(), CollectionError> {
        if self.controller.is_pending() {
            return Err(CollectionError::SubmissionPending);
        }
        Ok(())
    }

    /// Start submitting the current selection.
    ///
    /// Returns the ticket and a snapshot of the batch to upload, or
    /// `None` when nothing is selected or a submission is pending.
    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, FileCollection<F>)> {
        let batch = self.store.files().clone();
        let ticket = self.controller.begin(batch.len())?;
        Some((ticket, batch))
    }

    /// Apply the outcome of a submission.
    ///
    /// On success the selection is reset; on failure it is kept so the
    /// user can retry. Stale outcomes are ignored and return `None`.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<Vec<UploadedBlobMeta>, UploadError>,
    ) -> Option<Settlement> {
        let settlement = self.controller.finish(ticket, outcome, self.locale)?;
        if matches!(settlement, Settlement::Succeeded(_)) {
            self.store.reset();
        }
        Some(settlement)
    }

    /// Tear down: drop the selection and invalidate any pending ticket.
    pub fn abandon(&mut self) {
        self.controller.abandon();
        self.store.reset();
        self.rejections.clear();
    }
}
