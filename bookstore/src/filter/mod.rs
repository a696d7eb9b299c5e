//! Catalog filtering driven by the search form.
//!
//! A book is kept when it passes every non-empty criterion:
//!
//! | Criterion   | Book field  | Match                               |
//! |-------------|-------------|-------------------------------------|
//! | `title`     | `title`     | case-insensitive substring          |
//! | `publisher` | `publisher` | case-insensitive substring          |
//! | `year`      | `published` | literal substring of the date text  |
//! | `author`    | `author`    | case-insensitive substring          |
//!
//! `year` is deliberately a substring test on the stored date string, so
//! `"2014"` matches `"2014-04-08T00:00:00.000Z"` and so does `"04-08"`.
//!
//! Filtering is a pure function of its inputs; callers recompute it whenever
//! the criteria or the catalog change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Book;

/// One of the four search inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Title,
    Publisher,
    Year,
    Author,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Title,
        Criterion::Publisher,
        Criterion::Year,
        Criterion::Author,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Title => "title",
            Criterion::Publisher => "publisher",
            Criterion::Year => "year",
            Criterion::Author => "author",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Title => "Title",
            Criterion::Publisher => "Publisher",
            Criterion::Year => "Year",
            Criterion::Author => "Author",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown filter: {}", s))
    }
}

/// Current values of the search form. Empty means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub title: String,
    pub publisher: String,
    pub year: String,
    pub author: String,
}

impl FilterCriteria {
    pub fn get(&self, criterion: Criterion) -> &str {
        match criterion {
            Criterion::Title => &self.title,
            Criterion::Publisher => &self.publisher,
            Criterion::Year => &self.year,
            Criterion::Author => &self.author,
        }
    }

    pub fn set(&mut self, criterion: Criterion, value: impl Into<String>) {
        let value = value.into();
        match criterion {
            Criterion::Title => self.title = value,
            Criterion::Publisher => self.publisher = value,
            Criterion::Year => self.year = value,
            Criterion::Author => self.author = value,
        }
    }

    /// Builder-style [`FilterCriteria::set`].
    pub fn with(mut self, criterion: Criterion, value: impl Into<String>) -> Self {
        self.set(criterion, value);
        self
    }

    /// True when no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Criteria with a value, in form order.
    pub fn active(&self) -> impl Iterator<Item = (Criterion, &str)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, value)| !value.is_empty())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Does `book` pass every active criterion?
pub fn matches(book: &Book, criteria: &FilterCriteria) -> bool {
    criteria.active().all(|(criterion, value)| match criterion {
        Criterion::Title => contains_ignore_case(&book.title, value),
        Criterion::Publisher => contains_ignore_case(&book.publisher, value),
        Criterion::Year => book.published.contains(value),
        Criterion::Author => contains_ignore_case(&book.author, value),
    })
}

/// The books passing every active criterion, in their original order.
pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    if criteria.is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|book| matches(book, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, publisher: &str, author: &str, published: &str) -> Book {
        Book {
            isbn: format!("isbn-{}", title),
            title: title.into(),
            subtitle: None,
            author: author.into(),
            published: published.into(),
            publisher: publisher.into(),
            pages: 100,
            description: "Description".into(),
            website: "https://example.com".into(),
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book("Rust in Action", "Acme", "Tim McNamara", "2021-08-10"),
            book("Programming Rust", "Acme Press", "Jim Blandy", "2017-12-21"),
            book("The Go Programming Language", "Beta Co", "Alan Donovan", "2015-10-26"),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything() {
        let books = sample();
        assert_eq!(filter_books(&books, &FilterCriteria::default()), books);
    }

    #[test]
    fn test_publisher_is_case_insensitive_and_ordered() {
        let books = sample();
        let criteria = FilterCriteria::default().with(Criterion::Publisher, "acme");
        let result = filter_books(&books, &criteria);
        assert_eq!(titles(&result), vec!["Rust in Action", "Programming Rust"]);
    }

    #[test]
    fn test_title_substring() {
        let books = sample();
        let criteria = FilterCriteria::default().with(Criterion::Title, "PROGRAMMING");
        let result = filter_books(&books, &criteria);
        assert_eq!(
            titles(&result),
            vec!["Programming Rust", "The Go Programming Language"]
        );
    }

    #[test]
    fn test_year_is_literal_substring_of_date() {
        let books = sample();
        let by_year = FilterCriteria::default().with(Criterion::Year, "2017");
        assert_eq!(titles(&filter_books(&books, &by_year)), vec!["Programming Rust"]);

        let by_full_date = FilterCriteria::default().with(Criterion::Year, "2015-10-26");
        assert_eq!(
            titles(&filter_books(&books, &by_full_date)),
            vec!["The Go Programming Language"]
        );

        // Month-day fragments match too: no year parsing happens.
        let by_fragment = FilterCriteria::default().with(Criterion::Year, "-08-");
        assert_eq!(titles(&filter_books(&books, &by_fragment)), vec!["Rust in Action"]);
    }

    #[test]
    fn test_criteria_are_and_combined() {
        let books = sample();
        let criteria = FilterCriteria::default()
            .with(Criterion::Title, "rust")
            .with(Criterion::Author, "blandy");
        assert_eq!(titles(&filter_books(&books, &criteria)), vec!["Programming Rust"]);

        let none = criteria.with(Criterion::Year, "2021");
        assert!(filter_books(&books, &none).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = sample();
        let criteria = FilterCriteria::default().with(Criterion::Title, "rust");
        let once = filter_books(&books, &criteria);
        let twice = filter_books(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_catalog() {
        let criteria = FilterCriteria::default().with(Criterion::Title, "x");
        assert!(filter_books(&[], &criteria).is_empty());
        assert!(filter_books(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_active_skips_empty_values() {
        let criteria = FilterCriteria::default()
            .with(Criterion::Year, "2020")
            .with(Criterion::Title, "");
        let active: Vec<_> = criteria.active().collect();
        assert_eq!(active, vec![(Criterion::Year, "2020")]);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_criterion_from_str() {
        assert_eq!("Year".parse::<Criterion>(), Ok(Criterion::Year));
        assert!("isbn".parse::<Criterion>().is_err());
    }
}
