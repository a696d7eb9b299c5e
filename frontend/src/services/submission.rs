//! Finalizing the draft batch.
//!
//! There is no server yet: the batch goes to a [`LoggingSink`], which writes
//! it to the browser console.

use bookstore::{DraftBatch, FinalizeOutcome, LoggingSink};

use crate::types::{AppError, AppResult};

/// Submit every pending draft (plus the current one when valid).
pub fn submit_batch(batch: &mut DraftBatch) -> AppResult<FinalizeOutcome> {
    let mut sink = LoggingSink::new();
    let outcome = batch
        .finalize(&mut sink)
        .map_err(|e| AppError::Submission(e.to_string()))?;

    match &outcome {
        FinalizeOutcome::Submitted(receipt) => {
            log::info!("✅ Submitted {} books ({})", receipt.accepted, receipt.batch_id);
        }
        FinalizeOutcome::NothingToSubmit => {
            log::info!("Nothing to submit");
        }
    }

    Ok(outcome)
}
