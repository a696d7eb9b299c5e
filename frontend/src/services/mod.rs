//! Browser-side services.
//!
//! # Services
//!
//! - [`catalog`] - Catalog shared through the Leptos context
//! - [`preview`] - Object URLs for picked images
//! - [`submission`] - Finalizing the draft batch

pub mod catalog;
pub mod preview;
pub mod submission;

pub use catalog::*;
pub use preview::*;
pub use submission::*;
