//! Domain models for the bookstore catalog.
//!
//! - [`Book`] - A catalog record (read-only reference data)
//! - [`BookDraft`] - Raw form input for a book being added
//! - [`ValidDraft`] - A draft that passed every validation rule
//! - [`ImageAttachment`] - Metadata of an image picked for a draft
//! - [`Field`] - Names of the draft form fields

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Book
// =============================================================================

/// A book record of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// ISBN; ten digits for newly added books, free-form in the seed data.
    pub isbn: String,
    pub title: String,
    /// Secondary title, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub author: String,
    /// Publication date as stored (`2014-04-08T00:00:00.000Z`, `2014-04-08`, ...).
    pub published: String,
    pub publisher: String,
    pub pages: u32,
    pub description: String,
    pub website: String,
}

impl Book {
    /// Parsed publication date, if the stored string is a recognised format.
    pub fn published_date(&self) -> Option<NaiveDate> {
        parse_date(&self.published)
    }

    /// Route of the detail page for this book.
    pub fn detail_path(&self) -> String {
        format!("/category/{}", self.isbn)
    }
}

/// Parse a date the way the add-book form and the seed data write them.
///
/// Accepts plain dates (`2020-01-28`), RFC 3339 timestamps
/// (`2020-01-28T00:00:00.000Z`) and naive timestamps (`2020-01-28T10:30:00`).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

// =============================================================================
// Form Fields
// =============================================================================

/// A field of the add-book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Isbn,
    Title,
    Author,
    Published,
    Publisher,
    Pages,
    Description,
    Website,
    Image,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 9] = [
        Field::Isbn,
        Field::Title,
        Field::Author,
        Field::Published,
        Field::Publisher,
        Field::Pages,
        Field::Description,
        Field::Website,
        Field::Image,
    ];

    /// Form input name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Isbn => "isbn",
            Field::Title => "title",
            Field::Author => "author",
            Field::Published => "published",
            Field::Publisher => "publisher",
            Field::Pages => "pages",
            Field::Description => "description",
            Field::Website => "website",
            Field::Image => "image",
        }
    }

    /// Label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Isbn => "ISBN",
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Published => "Published",
            Field::Publisher => "Publisher",
            Field::Pages => "Pages",
            Field::Description => "Description",
            Field::Website => "Website",
            Field::Image => "Select Image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

// =============================================================================
// Image Attachment
// =============================================================================

/// An image picked for a draft. Only metadata is kept; the bytes stay with
/// the browser and are shown through a preview URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// File name as reported by the picker.
    pub name: String,
    /// MIME type (`image/png`, ...).
    pub mime_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl ImageAttachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

// =============================================================================
// Book Draft
// =============================================================================

/// Raw input of the add-book form.
///
/// Every text field holds exactly what was typed; `pages` stays a string so
/// that "12a" or "3.5" can be reported instead of silently coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published: String,
    pub publisher: String,
    #[serde(deserialize_with = "pages_from_json")]
    pub pages: String,
    pub description: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

impl BookDraft {
    /// Current text of a form field. The image field has no text value.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Isbn => &self.isbn,
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Published => &self.published,
            Field::Publisher => &self.publisher,
            Field::Pages => &self.pages,
            Field::Description => &self.description,
            Field::Website => &self.website,
            Field::Image => "",
        }
    }

    /// Overwrite a text field. Setting [`Field::Image`] is ignored; images go
    /// through [`BookDraft::image`].
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Isbn => self.isbn = value,
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Published => self.published = value,
            Field::Publisher => self.publisher = value,
            Field::Pages => self.pages = value,
            Field::Description => self.description = value,
            Field::Website => self.website = value,
            Field::Image => {}
        }
    }

    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            published: book.published.clone(),
            publisher: book.publisher.clone(),
            pages: book.pages.to_string(),
            description: book.description.clone(),
            website: book.website.clone(),
            image: None,
        }
    }
}

/// Accept `"pages": 120` as well as `"pages": "120"` in JSON drafts.
fn pages_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Pages {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Pages::deserialize(deserializer)? {
        Pages::Number(n) => n.to_string(),
        Pages::Text(s) => s,
    })
}

// =============================================================================
// Valid Draft
// =============================================================================

/// A draft that passed validation, with its typed book record.
///
/// Only [`crate::validation::accept`] builds one, so holding a `ValidDraft`
/// means the rules were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidDraft {
    pub book: Book,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

impl ValidDraft {
    pub(crate) fn new(book: Book, image: Option<ImageAttachment>) -> Self {
        Self { book, image }
    }

    pub fn title(&self) -> &str {
        &self.book.title
    }
}

// =============================================================================
// Tests
// =============================================================================
