//! Draft batch collector behind the add-book form.
//!
//! [`DraftBatch`] holds the drafts accepted so far plus the draft currently
//! bound to the form inputs.
//!
//! ```text
//!            set_field                validate_current / submit_current
//!   Empty ─────────────▶ Editing ─────────────────────────▶ Valid | Invalid
//!     ▲                    ▲                                    │
//!     │                    └──────────── set_field ─────────────┘
//!     │
//!     └── submit_current (Valid) → appended to batch, form reset
//! ```
//!
//! [`DraftBatch::finalize`] hands the batch (plus the current draft when it is
//! valid) to a [`SubmissionSink`] and clears everything once the sink
//! acknowledges. [`DraftBatch::cancel`] clears without submitting.

mod preview;

pub use preview::PreviewHandle;

use crate::error::{BatchError, BatchResult, SubmissionResult};
use crate::models::{BookDraft, Field, ImageAttachment, ValidDraft};
use crate::submission::{SubmissionReceipt, SubmissionSink};
use crate::validation::{accept, validate, ValidationReport};

/// Where the current draft stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DraftState {
    /// Nothing entered.
    #[default]
    Empty,
    /// Input changed since the last validation.
    Editing,
    /// Last validation passed.
    Valid,
    /// Last validation failed with these errors.
    Invalid(ValidationReport),
}

/// Result of a successful [`DraftBatch::finalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// The sink acknowledged the batch.
    Submitted(SubmissionReceipt),
    /// No accepted drafts and no valid current draft; the form was reset.
    NothingToSubmit,
}

/// Pending drafts plus the in-progress one.
#[derive(Debug, Default)]
pub struct DraftBatch {
    drafts: Vec<ValidDraft>,
    current: BookDraft,
    state: DraftState,
    preview: Option<PreviewHandle>,
}

impl DraftBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted drafts, in submission order.
    pub fn drafts(&self) -> &[ValidDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// The draft bound to the form.
    pub fn current(&self) -> &BookDraft {
        &self.current
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// URL of the preview for the attached image, if any.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(PreviewHandle::url)
    }

    // -------------------------------------------------------------------------
    // Editing the current draft
    // -------------------------------------------------------------------------

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.current.set(field, value);
        self.mark_edited();
    }

    /// Attach an image; a previous preview is released.
    pub fn attach_image(&mut self, image: ImageAttachment, preview: Option<PreviewHandle>) {
        self.current.image = Some(image);
        self.replace_preview(preview);
        self.mark_edited();
    }

    /// Detach the image and release its preview.
    pub fn remove_image(&mut self) {
        self.current.image = None;
        self.replace_preview(None);
        self.mark_edited();
    }

    fn replace_preview(&mut self, preview: Option<PreviewHandle>) {
        if let Some(old) = std::mem::replace(&mut self.preview, preview) {
            old.release();
        }
    }

    fn mark_edited(&mut self) {
        self.state = if self.current.is_blank() {
            DraftState::Empty
        } else {
            DraftState::Editing
        };
    }

    /// Validate the current draft and record the outcome in [`DraftBatch::state`].
    pub fn validate_current(&mut self) -> ValidationReport {
        let report = validate(&self.current);
        self.state = if report.is_valid() {
            DraftState::Valid
        } else {
            DraftState::Invalid(report.clone())
        };
        report
    }

    // -------------------------------------------------------------------------
    // Batch operations
    // -------------------------------------------------------------------------

    /// Validate the current draft and, when it passes, append it to the batch.
    ///
    /// Returns the new batch size. On failure the draft stays in the form.
    pub fn submit_current(&mut self) -> Result<usize, ValidationReport> {
        match accept(&self.current) {
            Ok(draft) => Ok(self.add_to_batch(draft)),
            Err(report) => {
                self.state = DraftState::Invalid(report.clone());
                Err(report)
            }
        }
    }

    /// Append an accepted draft and reset the form. Returns the new batch size.
    pub fn add_to_batch(&mut self, draft: ValidDraft) -> usize {
        log::debug!("Added \"{}\" to batch", draft.title());
        self.drafts.push(draft);
        self.reset_current();
        self.drafts.len()
    }

    /// Remove the draft at `index`, keeping the order of the others.
    pub fn try_remove(&mut self, index: usize) -> BatchResult<ValidDraft> {
        if index >= self.drafts.len() {
            return Err(BatchError::IndexOutOfRange {
                index,
                len: self.drafts.len(),
            });
        }
        Ok(self.drafts.remove(index))
    }

    /// Like [`DraftBatch::try_remove`], but an out-of-range index is a no-op.
    pub fn remove_from_batch(&mut self, index: usize) -> Option<ValidDraft> {
        match self.try_remove(index) {
            Ok(draft) => Some(draft),
            Err(err) => {
                log::debug!("Ignoring removal: {}", err);
                None
            }
        }
    }

    /// Submit the batch plus the current draft (when valid) as one unit.
    ///
    /// Nothing is cleared unless the sink acknowledges; on error the batch
    /// and the form are left as they were.
    pub fn finalize<S>(&mut self, sink: &mut S) -> SubmissionResult<FinalizeOutcome>
    where
        S: SubmissionSink + ?Sized,
    {
        let mut pending = self.drafts.clone();
        if !self.current.is_blank() {
            if let Ok(draft) = accept(&self.current) {
                pending.push(draft);
            }
        }

        if pending.is_empty() {
            self.reset_current();
            return Ok(FinalizeOutcome::NothingToSubmit);
        }

        match sink.submit(&pending) {
            Ok(receipt) => {
                log::info!(
                    "Batch {} accepted ({} books)",
                    receipt.batch_id,
                    receipt.accepted
                );
                self.drafts.clear();
                self.reset_current();
                Ok(FinalizeOutcome::Submitted(receipt))
            }
            Err(err) => {
                log::warn!("Batch submission failed: {}", err);
                Err(err)
            }
        }
    }

    /// Drop every pending draft and reset the form.
    pub fn cancel(&mut self) {
        self.drafts.clear();
        self.reset_current();
    }

    /// Empty the form and release the image preview.
    pub fn reset_current(&mut self) {
        self.current = BookDraft::default();
        self.state = DraftState::Empty;
        self.replace_preview(None);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ItemFailure, SubmissionError};
    use std::cell::Cell;
    use std::rc::Rc;

    fn fill_valid(batch: &mut DraftBatch, title: &str) {
        batch.set_field(Field::Isbn, "1234567890");
        batch.set_field(Field::Title, title);
        batch.set_field(Field::Author, "Axel Rauschmayer");
        batch.set_field(Field::Published, "2014-04-08");
        batch.set_field(Field::Publisher, "O'Reilly Media");
        batch.set_field(Field::Pages, "460");
        batch.set_field(Field::Description, "An in-depth guide for programmers.");
        batch.set_field(Field::Website, "http://speakingjs.com/");
    }

    fn counted_preview(url: &str, counter: &Rc<Cell<usize>>) -> PreviewHandle {
        let counter = Rc::clone(counter);
        PreviewHandle::new(url, move |_: &str| counter.set(counter.get() + 1))
    }

    struct RejectingSink;

    impl SubmissionSink for RejectingSink {
        fn submit(&mut self, drafts: &[ValidDraft]) -> SubmissionResult<SubmissionReceipt> {
            Err(SubmissionError::Rejected {
                total: drafts.len(),
                failures: vec![ItemFailure {
                    index: 0,
                    title: drafts[0].title().to_string(),
                    reason: "already exists".into(),
                }],
            })
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Vec<String>>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&mut self, drafts: &[ValidDraft]) -> SubmissionResult<SubmissionReceipt> {
            self.calls
                .push(drafts.iter().map(|d| d.title().to_string()).collect());
            Ok(SubmissionReceipt::new(drafts.len()))
        }
    }

    #[test]
    fn test_state_machine() {
        let mut batch = DraftBatch::new();
        assert_eq!(batch.state(), &DraftState::Empty);

        batch.set_field(Field::Title, "short");
        assert_eq!(batch.state(), &DraftState::Editing);

        let report = batch.validate_current();
        assert!(matches!(batch.state(), DraftState::Invalid(r) if *r == report));

        fill_valid(&mut batch, "Speaking JavaScript");
        assert_eq!(batch.state(), &DraftState::Editing);
        assert!(batch.validate_current().is_valid());
        assert_eq!(batch.state(), &DraftState::Valid);

        assert_eq!(batch.submit_current(), Ok(1));
        assert_eq!(batch.state(), &DraftState::Empty);
        assert!(batch.current().is_blank());
    }

    #[test]
    fn test_clearing_input_returns_to_empty() {
        let mut batch = DraftBatch::new();
        batch.set_field(Field::Author, "Someone");
        batch.set_field(Field::Author, "");
        assert_eq!(batch.state(), &DraftState::Empty);
    }

    #[test]
    fn test_invalid_submit_keeps_draft() {
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "Speaking JavaScript");
        batch.set_field(Field::Pages, "10000");

        let report = batch.submit_current().unwrap_err();
        assert_eq!(
            report.message_for(Field::Pages),
            Some("Must be at most 9999 pages")
        );
        assert!(batch.is_empty());
        assert_eq!(batch.current().pages, "10000");

        batch.set_field(Field::Pages, "9999");
        assert_eq!(batch.submit_current(), Ok(1));
    }

    #[test]
    fn test_add_then_remove() {
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "Speaking JavaScript");
        batch.submit_current().unwrap();

        let removed = batch.remove_from_batch(0).unwrap();
        assert_eq!(removed.title(), "Speaking JavaScript");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut batch = DraftBatch::new();
        assert!(batch.remove_from_batch(5).is_none());
        assert_eq!(
            batch.try_remove(5).unwrap_err(),
            BatchError::IndexOutOfRange { index: 5, len: 0 }
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut batch = DraftBatch::new();
        for title in ["First Long Title", "Second Long Title", "Third Long Title"] {
            fill_valid(&mut batch, title);
            batch.submit_current().unwrap();
        }
        batch.remove_from_batch(1);
        let titles: Vec<&str> = batch.drafts().iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["First Long Title", "Third Long Title"]);
    }

    #[test]
    fn test_preview_released_on_replace_remove_and_reset() {
        let released = Rc::new(Cell::new(0));
        let mut batch = DraftBatch::new();

        let png = ImageAttachment::new("a.png", "image/png", 10);
        batch.attach_image(png.clone(), Some(counted_preview("blob:a", &released)));
        assert_eq!(batch.preview_url(), Some("blob:a"));

        batch.attach_image(png.clone(), Some(counted_preview("blob:b", &released)));
        assert_eq!(released.get(), 1);
        assert_eq!(batch.preview_url(), Some("blob:b"));

        batch.remove_image();
        assert_eq!(released.get(), 2);
        assert_eq!(batch.preview_url(), None);
        assert!(batch.current().image.is_none());

        fill_valid(&mut batch, "Speaking JavaScript");
        batch.attach_image(png, Some(counted_preview("blob:c", &released)));
        batch.submit_current().unwrap();
        assert_eq!(released.get(), 3);
        assert_eq!(batch.drafts()[0].image.as_ref().unwrap().name, "a.png");
    }

    #[test]
    fn test_preview_released_when_batch_dropped() {
        let released = Rc::new(Cell::new(0));
        {
            let mut batch = DraftBatch::new();
            batch.attach_image(
                ImageAttachment::new("a.jpg", "image/jpeg", 10),
                Some(counted_preview("blob:a", &released)),
            );
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_finalize_includes_valid_current_draft() {
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "First Long Title");
        batch.submit_current().unwrap();
        fill_valid(&mut batch, "Second Long Title");

        let mut sink = RecordingSink::default();
        let outcome = batch.finalize(&mut sink).unwrap();

        assert!(matches!(outcome, FinalizeOutcome::Submitted(ref r) if r.accepted == 2));
        assert_eq!(
            sink.calls,
            vec![vec!["First Long Title".to_string(), "Second Long Title".to_string()]]
        );
        assert!(batch.is_empty());
        assert!(batch.current().is_blank());
    }

    #[test]
    fn test_finalize_skips_invalid_current_draft() {
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "First Long Title");
        batch.submit_current().unwrap();
        batch.set_field(Field::Title, "short");

        let mut sink = RecordingSink::default();
        batch.finalize(&mut sink).unwrap();
        assert_eq!(sink.calls, vec![vec!["First Long Title".to_string()]]);
    }

    #[test]
    fn test_finalize_with_nothing_does_not_call_sink() {
        let mut batch = DraftBatch::new();
        batch.set_field(Field::Title, "short");

        let mut sink = RecordingSink::default();
        let outcome = batch.finalize(&mut sink).unwrap();
        assert_eq!(outcome, FinalizeOutcome::NothingToSubmit);
        assert!(sink.calls.is_empty());
        assert!(batch.current().is_blank());
    }

    #[test]
    fn test_finalize_failure_keeps_state() {
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "First Long Title");
        batch.submit_current().unwrap();
        fill_valid(&mut batch, "Second Long Title");

        let err = batch.finalize(&mut RejectingSink).unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { total: 2, .. }));
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.current().title, "Second Long Title");
    }

    #[test]
    fn test_cancel_clears_everything() {
        let released = Rc::new(Cell::new(0));
        let mut batch = DraftBatch::new();
        fill_valid(&mut batch, "First Long Title");
        batch.submit_current().unwrap();
        batch.attach_image(
            ImageAttachment::new("a.png", "image/png", 1),
            Some(counted_preview("blob:a", &released)),
        );

        batch.cancel();
        assert!(batch.is_empty());
        assert_eq!(batch.state(), &DraftState::Empty);
        assert_eq!(released.get(), 1);
    }
}
