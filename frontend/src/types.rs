//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Navigation Types** - Navbar links and breadcrumbs
//! - **Info Types** - Footer info topics
//! - **Display Helpers** - Formatting of book fields
//! - **Error Types** - Frontend error handling

use chrono::NaiveDate;
use std::fmt;

use bookstore::Book;

use crate::config::INFO_TEXT;

// =============================================================================
// Navigation Types
// =============================================================================

/// A link of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

/// Links shown in the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        title: "Homepage",
        path: "/homepage",
    },
    NavLink {
        title: "Search",
        path: "/search",
    },
];

/// Breadcrumb label for a route: the path without its leading slash, upper-cased.
///
/// `/category/9781593279509` becomes `CATEGORY/9781593279509`.
pub fn breadcrumb(pathname: &str) -> String {
    pathname
        .strip_prefix('/')
        .unwrap_or(pathname)
        .to_uppercase()
}

// =============================================================================
// Info Types
// =============================================================================

/// Topics reachable from the footer, each opening the info modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoTopic {
    AboutCompany,
    TermsOfUse,
    PaymentMethods,
    ShippingMethods,
}

impl InfoTopic {
    pub const ALL: [InfoTopic; 4] = [
        InfoTopic::AboutCompany,
        InfoTopic::TermsOfUse,
        InfoTopic::PaymentMethods,
        InfoTopic::ShippingMethods,
    ];

    /// Button label and card header.
    pub fn title(&self) -> &'static str {
        match self {
            InfoTopic::AboutCompany => "About Company",
            InfoTopic::TermsOfUse => "Terms of Use",
            InfoTopic::PaymentMethods => "Payment Methods",
            InfoTopic::ShippingMethods => "Shipping Methods",
        }
    }

    pub fn text(&self) -> &'static str {
        INFO_TEXT
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

/// Short date as shown on the detail page (`4/8/2014`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Publication date of a book, falling back to the raw value when unparsable.
pub fn published_label(book: &Book) -> String {
    book.published_date()
        .map(format_date)
        .unwrap_or_else(|| book.published.clone())
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Image preview could not be created.
    Preview(String),
    /// The batch could not be submitted.
    Submission(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Preview(msg) => write!(f, "Preview error: {}", msg),
            AppError::Submission(msg) => write!(f, "Submission error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
