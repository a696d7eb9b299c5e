//! End-to-end flows through the public API: searching the catalog and
//! collecting drafts into a submitted batch.

use bookstore::{
    filter_books, Book, BookDraft, Catalog, Criterion, DraftBatch, DraftState, Field,
    FilterCriteria, FinalizeOutcome, ImageAttachment, LoggingSink, SubmissionSink,
};

fn book(isbn: &str, title: &str, publisher: &str, published: &str) -> Book {
    Book {
        isbn: isbn.into(),
        title: title.into(),
        subtitle: None,
        author: "Someone".into(),
        published: published.into(),
        publisher: publisher.into(),
        pages: 100,
        description: "Something.".into(),
        website: "https://example.com".into(),
    }
}

fn fill(batch: &mut DraftBatch, title: &str, pages: &str) {
    batch.set_field(Field::Title, title);
    batch.set_field(Field::Author, "Jane Doe");
    batch.set_field(Field::Published, "2020-01-01");
    batch.set_field(Field::Publisher, "Acme Press");
    batch.set_field(Field::Pages, pages);
    batch.set_field(Field::Description, "A fine book.");
    batch.set_field(Field::Website, "https://example.com");
}

#[test]
fn test_publisher_search_matches_substring_ignoring_case() {
    let catalog = Catalog::new(vec![
        book("1", "First Book", "Acme", "2010-01-01"),
        book("2", "Second Book", "Beta Co", "2011-01-01"),
        book("3", "Third Book", "Acme Press", "2012-01-01"),
    ])
    .unwrap();

    let criteria = FilterCriteria::default().with(Criterion::Publisher, "acme");
    let isbns: Vec<String> = catalog
        .filter(&criteria)
        .into_iter()
        .map(|b| b.isbn)
        .collect();

    assert_eq!(isbns, vec!["1", "3"]);
}

#[test]
fn test_filter_results_are_ordered_subset() {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria::default().with(Criterion::Title, "javascript");
    let results = catalog.filter(&criteria);

    assert!(!results.is_empty());
    assert!(results.len() <= catalog.len());

    let positions: Vec<usize> = results
        .iter()
        .map(|r| {
            catalog
                .books()
                .iter()
                .position(|b| b.isbn == r.isbn)
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Filtering the result again changes nothing
    assert_eq!(filter_books(&results, &criteria), results);
}

#[test]
fn test_empty_criteria_returns_whole_catalog() {
    let catalog = Catalog::seed();
    assert_eq!(catalog.filter(&FilterCriteria::default()), catalog.books());
}

#[test]
fn test_pages_limit_then_accept() {
    let mut batch = DraftBatch::new();

    fill(&mut batch, "A Long Enough Title", "10000");
    let report = batch.submit_current().unwrap_err();
    assert_eq!(
        report.message_for(Field::Pages),
        Some("Must be at most 9999 pages")
    );
    assert!(batch.is_empty());
    assert!(matches!(batch.state(), DraftState::Invalid(_)));

    batch.set_field(Field::Pages, "9999");
    assert_eq!(batch.submit_current(), Ok(1));
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.state(), &DraftState::Empty);
    assert!(batch.current().is_blank());
}

#[test]
fn test_add_then_remove() {
    let mut batch = DraftBatch::new();
    fill(&mut batch, "A Long Enough Title", "120");
    batch.submit_current().unwrap();

    assert!(batch.remove_from_batch(5).is_none());
    assert_eq!(batch.len(), 1);

    let removed = batch.remove_from_batch(0).unwrap();
    assert_eq!(removed.title(), "A Long Enough Title");
    assert!(batch.is_empty());
}

#[test]
fn test_finalize_submits_batch_and_valid_current_draft() {
    let mut batch = DraftBatch::new();
    fill(&mut batch, "The First Long Title", "120");
    batch.submit_current().unwrap();
    fill(&mut batch, "The Second Long Title", "240");

    let mut sink = LoggingSink::new();
    let outcome = batch.finalize(&mut sink).unwrap();

    match outcome {
        FinalizeOutcome::Submitted(receipt) => assert_eq!(receipt.accepted, 2),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(sink.submitted(), 2);
    assert!(batch.is_empty());
    assert!(batch.current().is_blank());
}

#[test]
fn test_finalize_with_nothing_does_not_call_sink() {
    let mut batch = DraftBatch::new();
    batch.set_field(Field::Title, "short");

    let mut sink = LoggingSink::new();
    assert_eq!(
        batch.finalize(&mut sink).unwrap(),
        FinalizeOutcome::NothingToSubmit
    );
    assert_eq!(sink.submitted(), 0);
    assert!(batch.current().is_blank());
}

#[test]
fn test_finalize_through_trait_object() {
    let mut batch = DraftBatch::new();
    fill(&mut batch, "A Long Enough Title", "300");
    batch.submit_current().unwrap();

    let mut sink: Box<dyn SubmissionSink> = Box::new(LoggingSink::new());
    assert!(matches!(
        batch.finalize(sink.as_mut()).unwrap(),
        FinalizeOutcome::Submitted(_)
    ));
}

#[test]
fn test_catalog_book_round_trips_as_draft() {
    let catalog = Catalog::seed();
    let book = catalog.find_by_isbn("9781484200766").unwrap();
    let draft = BookDraft::from(book);

    let mut batch = DraftBatch::new();
    for field in Field::ALL {
        batch.set_field(field, draft.value(field));
    }
    assert_eq!(
        batch.validate_current().message_for(Field::Isbn),
        Some("Must be exactly 10 digits")
    );
}

#[test]
fn test_unaccepted_image_can_be_removed_before_adding() {
    let mut batch = DraftBatch::new();
    fill(&mut batch, "A Book With A Cover", "120");
    batch.attach_image(ImageAttachment::new("cover.gif", "image/gif", 512), None);

    assert_eq!(batch.preview_url(), None);
    assert!(batch.current().image.is_some());
    let report = batch.submit_current().unwrap_err();
    assert_eq!(
        report.message_for(Field::Image),
        Some("Image must be a JPEG or PNG file")
    );

    batch.remove_image();
    assert_eq!(batch.current().image, None);
    assert_eq!(batch.submit_current(), Ok(1));
}
