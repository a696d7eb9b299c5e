//! Validation rules for book drafts.
//!
//! Rules are a flat table of `(field, predicate, message)` entries. Each field
//! is checked on its own, so an invalid title never hides a problem with the
//! website; for every field only the first failing rule is reported, in table
//! order.
//!
//! | Field         | Rules                                                   |
//! |---------------|---------------------------------------------------------|
//! | `isbn`        | optional; exactly 10 digits when present                |
//! | `title`       | required; 10..=120 characters                           |
//! | `author`      | required                                                |
//! | `published`   | required; a date                                        |
//! | `publisher`   | required; 5..=60 characters                             |
//! | `pages`       | required; number; positive; integer; at most 9999       |
//! | `description` | required; starts with A-Z; at most 512 characters       |
//! | `website`     | required; http(s)/ftp URL                               |
//! | `image`       | optional; `image/jpeg`, `image/png` or `image/jpg`      |
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstore::{validate, BookDraft, Field};
//!
//! let mut draft = BookDraft::default();
//! draft.set(Field::Title, "short");
//! let report = validate(&draft);
//! assert_eq!(report.message_for(Field::Title), Some("Must be at least 10 characters"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::FieldError;
use crate::models::{parse_date, Book, BookDraft, Field, ValidDraft};

pub const TITLE_MIN_LEN: usize = 10;
pub const TITLE_MAX_LEN: usize = 120;
pub const PUBLISHER_MIN_LEN: usize = 5;
pub const PUBLISHER_MAX_LEN: usize = 60;
pub const PAGES_MAX: u32 = 9999;
pub const DESCRIPTION_MAX_LEN: usize = 512;

/// MIME types an attached cover image may have.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

static ISBN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static UPPERCASE_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]").unwrap());

// =============================================================================
// Rule Table
// =============================================================================

struct Rule {
    field: Field,
    passes: fn(&BookDraft) -> bool,
    message: &'static str,
}

const fn rule(field: Field, passes: fn(&BookDraft) -> bool, message: &'static str) -> Rule {
    Rule {
        field,
        passes,
        message,
    }
}

static RULES: &[Rule] = &[
    rule(
        Field::Isbn,
        |d| d.isbn.is_empty() || ISBN_RE.is_match(&d.isbn),
        "Must be exactly 10 digits",
    ),
    rule(Field::Title, |d| present(&d.title), "Title is required"),
    rule(
        Field::Title,
        |d| char_len(&d.title) >= TITLE_MIN_LEN,
        "Must be at least 10 characters",
    ),
    rule(
        Field::Title,
        |d| char_len(&d.title) <= TITLE_MAX_LEN,
        "Must be at most 120 characters",
    ),
    rule(Field::Author, |d| present(&d.author), "Author is required"),
    rule(
        Field::Published,
        |d| present(&d.published),
        "Published date is required",
    ),
    rule(
        Field::Published,
        |d| parse_date(&d.published).is_some(),
        "Must be a valid date",
    ),
    rule(Field::Publisher, |d| present(&d.publisher), "Publisher is required"),
    rule(
        Field::Publisher,
        |d| char_len(&d.publisher) >= PUBLISHER_MIN_LEN,
        "Must be at least 5 characters",
    ),
    rule(
        Field::Publisher,
        |d| char_len(&d.publisher) <= PUBLISHER_MAX_LEN,
        "Must be at most 60 characters",
    ),
    rule(Field::Pages, |d| present(&d.pages), "Pages are required"),
    rule(
        Field::Pages,
        |d| pages_number(d).is_some(),
        "Must be a number",
    ),
    rule(
        Field::Pages,
        |d| pages_number(d).map_or(true, |n| n > 0.0),
        "Must be a positive number",
    ),
    rule(
        Field::Pages,
        |d| pages_number(d).map_or(true, |n| n.fract() == 0.0),
        "Must be an integer",
    ),
    rule(
        Field::Pages,
        |d| pages_number(d).map_or(true, |n| n <= f64::from(PAGES_MAX)),
        "Must be at most 9999 pages",
    ),
    rule(
        Field::Description,
        |d| present(&d.description),
        "Description is required",
    ),
    rule(
        Field::Description,
        |d| UPPERCASE_START_RE.is_match(&d.description),
        "Description must start with an uppercase letter",
    ),
    rule(
        Field::Description,
        |d| char_len(&d.description) <= DESCRIPTION_MAX_LEN,
        "Must be at most 512 characters",
    ),
    rule(Field::Website, |d| present(&d.website), "Website is required"),
    rule(Field::Website, |d| is_url(&d.website), "Must be a valid URL"),
    rule(
        Field::Image,
        |d| {
            d.image
                .as_ref()
                .map_or(true, |img| is_accepted_image_type(&img.mime_type))
        },
        "Image must be a JPEG or PNG file",
    ),
];

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn pages_number(draft: &BookDraft) -> Option<f64> {
    draft
        .pages
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn is_url(value: &str) -> bool {
    match url::Url::parse(value.trim()) {
        Ok(parsed) => {
            URL_SCHEMES.contains(&parsed.scheme())
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Is `mime_type` one of [`ACCEPTED_IMAGE_TYPES`]?
pub fn is_accepted_image_type(mime_type: &str) -> bool {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    ACCEPTED_IMAGE_TYPES.contains(&mime_type.as_str())
}

// =============================================================================
// Validation Report
// =============================================================================

/// Outcome of validating a draft: at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// True when the draft may be added to the batch.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.error_for(field).map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("valid");
        }
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Check every field of `draft`.
pub fn validate(draft: &BookDraft) -> ValidationReport {
    let mut errors: Vec<FieldError> = Vec::new();
    for rule in RULES {
        if errors.iter().any(|e| e.field == rule.field) {
            continue;
        }
        if !(rule.passes)(draft) {
            errors.push(FieldError::new(rule.field, rule.message));
        }
    }
    errors.sort_by_key(|e| e.field);
    ValidationReport { errors }
}

/// Check a single field, for feedback while typing.
pub fn validate_field(draft: &BookDraft, field: Field) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.passes)(draft))
        .map(|rule| FieldError::new(rule.field, rule.message))
}

/// Validate `draft` and, if every rule passes, turn it into a [`ValidDraft`].
pub fn accept(draft: &BookDraft) -> Result<ValidDraft, ValidationReport> {
    let report = validate(draft);
    if !report.is_valid() {
        return Err(report);
    }

    // The pages rules guarantee a whole number in 1..=PAGES_MAX.
    let pages = pages_number(draft).map(|n| n as u32).unwrap_or_default();

    let book = Book {
        isbn: draft.isbn.trim().to_string(),
        title: draft.title.clone(),
        subtitle: None,
        author: draft.author.clone(),
        published: draft.published.trim().to_string(),
        publisher: draft.publisher.clone(),
        pages,
        description: draft.description.clone(),
        website: draft.website.trim().to_string(),
    };
    Ok(ValidDraft::new(book, draft.image.clone()))
}

// =============================================================================
// Tests
// =============================================================================
