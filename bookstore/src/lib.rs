//! # Bookstore - catalog search and batched book drafts
//!
//! The behaviour behind the bookstore single-page application, free of any
//! rendering: the immutable catalog, the search filter, the add-book
//! validation rules and the batch of drafts waiting to be submitted.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│   Filter    │────▶│  Book grid  │
//! │ (seed JSON) │     │ (criteria)  │     │ / detail    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Form input │────▶│ Validation  │────▶│ DraftBatch  │────▶│    Sink     │
//! │ (BookDraft) │     │ (rule table)│     │  (pending)  │     │  (finalize) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookstore::{Catalog, Criterion, FilterCriteria};
//!
//! let catalog = Catalog::seed();
//! let criteria = FilterCriteria::default().with(Criterion::Publisher, "o'reilly");
//! for book in catalog.filter(&criteria) {
//!     println!("{} ({})", book.title, book.publisher);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain models (Book, BookDraft, ValidDraft)
//! - [`catalog`] - The immutable book catalog
//! - [`filter`] - Search criteria and filtering
//! - [`validation`] - Add-book rule table
//! - [`batch`] - Draft batch collector
//! - [`submission`] - Submission sink boundary

// Core modules
pub mod error;
pub mod models;

// Catalog
pub mod catalog;
pub mod filter;

// Drafts
pub mod validation;
pub mod batch;
pub mod submission;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    BatchError,
    CatalogError,
    FieldError,
    ItemFailure,
    SubmissionError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    parse_date,
    Book,
    BookDraft,
    Field,
    ImageAttachment,
    ValidDraft,
};

// =============================================================================
// Re-exports - Catalog & Filter
// =============================================================================

pub use catalog::Catalog;
pub use filter::{filter_books, matches, Criterion, FilterCriteria};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    accept,
    is_accepted_image_type,
    validate,
    validate_field,
    ValidationReport,
    ACCEPTED_IMAGE_TYPES,
};

// =============================================================================
// Re-exports - Batch & Submission
// =============================================================================

pub use batch::{DraftBatch, DraftState, FinalizeOutcome, PreviewHandle};
pub use submission::{LoggingSink, SubmissionReceipt, SubmissionSink};
