//! The book catalog: an immutable, ordered list of [`Book`] records.
//!
//! A [`Catalog`] is cheap to clone (the books sit behind an `Arc`), so the
//! frontend can hand copies to every page without ever mutating the list.
//! The default catalog is embedded at compile time from `data/books.json`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::{filter_books, FilterCriteria};
use crate::models::Book;

const SEED_CATALOG: &str = include_str!("../../data/books.json");

/// Immutable collection of books, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    /// Catalog built from the embedded seed data.
    pub fn seed() -> Self {
        Self::from_json(SEED_CATALOG).expect("Invalid embedded catalog")
    }

    /// Build a catalog, rejecting duplicate ISBNs.
    pub fn new(books: Vec<Book>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.isbn.as_str()) {
                return Err(CatalogError::DuplicateIsbn(book.isbn.clone()));
            }
        }
        Ok(Self {
            books: books.into(),
        })
    }

    /// Parse a JSON array of books.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Self::new(books)
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        log::debug!(
            "Loaded {} books from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Resolve one book for the detail view.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Books matching every non-empty criterion, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Book> {
        filter_books(&self.books, criteria)
    }

    /// The first `count` books, used by the homepage carousel.
    pub fn featured(&self, count: usize) -> &[Book] {
        &self.books[..count.min(self.books.len())]
    }

    /// Books listed as "Other books you may like" under the detail page of
    /// `isbn`: the whole catalog minus the displayed book.
    pub fn related(&self, isbn: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.isbn != isbn)
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn book(isbn: &str, title: &str) -> Book {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            subtitle: None,
            author: "Author".into(),
            published: "2020-01-01".into(),
            publisher: "Publisher".into(),
            pages: 100,
            description: "Description".into(),
            website: "https://example.com".into(),
        }
    }

    #[test]
    fn test_seed_catalog_parses() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.books().iter().all(|b| !b.title.is_empty()));
        assert!(catalog.books().iter().all(|b| b.published_date().is_some()));
    }

    #[test]
    fn test_find_by_isbn() {
        let catalog = Catalog::seed();
        let book = catalog.find_by_isbn("9781449365035").unwrap();
        assert_eq!(book.title, "Speaking JavaScript");
        assert!(catalog.find_by_isbn("0000000000").is_none());
    }

    #[test]
    fn test_duplicate_isbn_rejected() {
        let result = Catalog::new(vec![book("1", "First"), book("1", "Second")]);
        assert!(matches!(result, Err(CatalogError::DuplicateIsbn(isbn)) if isbn == "1"));
    }

    #[test]
    fn test_featured_is_clamped() {
        let catalog = Catalog::new(vec![book("1", "First"), book("2", "Second")]).unwrap();
        assert_eq!(catalog.featured(3).len(), 2);
        assert_eq!(catalog.featured(1)[0].isbn, "1");
    }

    #[test]
    fn test_related_excludes_current() {
        let catalog =
            Catalog::new(vec![book("1", "First"), book("2", "Second"), book("3", "Third")])
                .unwrap();
        let related: Vec<String> = catalog.related("2").into_iter().map(|b| b.isbn).collect();
        assert_eq!(related, vec!["1", "3"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&vec![book("42", "Answer")]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "Answer");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
