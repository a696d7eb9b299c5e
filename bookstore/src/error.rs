//! Error types for the bookstore catalog.
//!
//! - [`CatalogError`] - Loading and checking the book catalog
//! - [`FieldError`] - A single invalid draft field (never fatal)
//! - [`BatchError`] - Draft batch bookkeeping
//! - [`SubmissionError`] - Failures reported by a submission sink
//!
//! Field errors are collected into a
//! [`ValidationReport`](crate::validation::ValidationReport) and returned as
//! values; they are not meant to travel through `?`.

use thiserror::Error;

use crate::models::Field;

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of books.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two books share an ISBN, so detail lookup would be ambiguous.
    #[error("Duplicate ISBN in catalog: {0}")]
    DuplicateIsbn(String),
}

// =============================================================================
// Field Validation Errors
// =============================================================================

/// One invalid field of a book draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field the message belongs to.
    pub field: Field,
    /// Human-readable message shown next to the input.
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// =============================================================================
// Batch Errors
// =============================================================================

/// Errors from the draft batch collector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Removal of a position the batch does not have.
    #[error("No draft at index {index} (batch holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// Submission Errors
// =============================================================================

/// A draft the sink refused, by position in the submitted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Position in the submitted sequence.
    pub index: usize,
    /// Title of the refused draft, for display.
    pub title: String,
    /// Why the sink refused it.
    pub reason: String,
}

/// Errors returned by a [`SubmissionSink`](crate::submission::SubmissionSink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The sink only accepts non-empty batches.
    #[error("Nothing to submit")]
    EmptyBatch,

    /// Some drafts were refused; the batch is left untouched.
    #[error("{} of {total} drafts were rejected", failures.len())]
    Rejected {
        total: usize,
        failures: Vec<ItemFailure>,
    },

    /// The sink could not be reached at all.
    #[error("Submission failed: {0}")]
    Unavailable(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Result type for submission operations.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
