//! Submission of a finalized draft batch.
//!
//! A [`SubmissionSink`] receives the whole batch as one ordered, non-empty
//! slice and either acknowledges it with a [`SubmissionReceipt`] or refuses
//! it. The batch collector clears its state only after an acknowledgement.
//!
//! [`LoggingSink`] is the sink shipped with the application: it logs the
//! batch and always succeeds, nothing is stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{SubmissionError, SubmissionResult};
use crate::models::ValidDraft;

/// Acknowledgement of an accepted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Identifier of the accepted batch.
    pub batch_id: Uuid,
    /// Number of drafts accepted.
    pub accepted: usize,
    /// When the sink acknowledged the batch.
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(accepted: usize) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            accepted,
            submitted_at: Utc::now(),
        }
    }
}

/// Destination of finalized batches.
pub trait SubmissionSink {
    /// Take ownership of `drafts` as one unit.
    ///
    /// `drafts` is never empty when called by the batch collector.
    fn submit(&mut self, drafts: &[ValidDraft]) -> SubmissionResult<SubmissionReceipt>;
}

/// Sink that only logs what it receives.
#[derive(Debug, Default, Clone)]
pub struct LoggingSink {
    submitted: usize,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drafts acknowledged so far.
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&mut self, drafts: &[ValidDraft]) -> SubmissionResult<SubmissionReceipt> {
        if drafts.is_empty() {
            return Err(SubmissionError::EmptyBatch);
        }

        log::info!("Submitting {} books", drafts.len());
        for (i, draft) in drafts.iter().enumerate() {
            log::info!(
                "  [{}] {} by {} ({} pages){}",
                i,
                draft.book.title,
                draft.book.author,
                draft.book.pages,
                draft
                    .image
                    .as_ref()
                    .map(|img| format!(", cover {}", img.name))
                    .unwrap_or_default()
            );
        }

        self.submitted += drafts.len();
        Ok(SubmissionReceipt::new(drafts.len()))
    }
}
