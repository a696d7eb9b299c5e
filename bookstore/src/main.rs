//! Bookstore CLI - browse the catalog and check book drafts from a terminal
//!
//! # Commands
//!
//! ```bash
//! bookstore list                          # Every book in the catalog
//! bookstore search --publisher "no starch" # Filter the catalog
//! bookstore show 9781449365035            # One book by ISBN
//! bookstore validate drafts.json          # Check drafts against the add-book rules
//! bookstore batch drafts.json             # Collect drafts and submit them as one batch
//! ```
//!
//! `--catalog <file>` (or `BOOKSTORE_CATALOG`) replaces the embedded catalog
//! with a JSON array of books. Log verbosity follows `RUST_LOG`.

use bookstore::{
    accept, validate, Book, BookDraft, Catalog, Criterion, DraftBatch, FilterCriteria,
    FinalizeOutcome, LoggingSink,
};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CATALOG_ENV: &str = "BOOKSTORE_CATALOG";

#[derive(Parser)]
#[command(name = "bookstore", version)]
#[command(about = "Browse the bookstore catalog and validate new book drafts", long_about = None)]
struct Cli {
    /// Catalog JSON file (default: embedded catalog, or $BOOKSTORE_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Filter the catalog; every given filter must match
    Search {
        /// Case-insensitive title fragment
        #[arg(long)]
        title: Option<String>,

        /// Case-insensitive publisher fragment
        #[arg(long)]
        publisher: Option<String>,

        /// Fragment of the publication date (e.g. 2014 or 2014-04-08)
        #[arg(long)]
        year: Option<String>,

        /// Case-insensitive author fragment
        #[arg(long)]
        author: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one book by ISBN
    Show {
        /// ISBN of the book
        isbn: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON draft (or array of drafts) against the add-book rules
    Validate {
        /// Input JSON file
        input: PathBuf,
    },

    /// Collect valid drafts into a batch and submit it
    Batch {
        /// Input JSON file (array of drafts)
        input: PathBuf,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_catalog(cli.catalog.as_deref()).and_then(|catalog| match cli.command {
        Commands::List { json } => cmd_list(&catalog, json),

        Commands::Search {
            title,
            publisher,
            year,
            author,
            json,
        } => {
            let criteria = [
                (Criterion::Title, title),
                (Criterion::Publisher, publisher),
                (Criterion::Year, year),
                (Criterion::Author, author),
            ]
            .into_iter()
            .fold(FilterCriteria::default(), |criteria, (criterion, value)| {
                criteria.with(criterion, value.unwrap_or_default())
            });
            cmd_search(&catalog, &criteria, json)
        }

        Commands::Show { isbn, json } => cmd_show(&catalog, &isbn, json),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Batch { input } => cmd_batch(&input),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let from_env = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
    match path.map(Path::to_path_buf).or(from_env) {
        Some(p) => Ok(Catalog::load(&p)?),
        None => Ok(Catalog::seed()),
    }
}

fn cmd_list(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    print_books(catalog.books(), json)
}

fn cmd_search(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let books = catalog.filter(criteria);
    let active: Vec<String> = criteria
        .active()
        .map(|(c, v)| format!("{}={:?}", c, v))
        .collect();
    eprintln!(
        "Found {} of {} books{}",
        books.len(),
        catalog.len(),
        if active.is_empty() {
            String::new()
        } else {
            format!(" matching {}", active.join(", "))
        }
    );
    print_books(&books, json)
}

fn cmd_show(catalog: &Catalog, isbn: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let book = catalog
        .find_by_isbn(isbn)
        .ok_or_else(|| format!("Book not found: {}", isbn))?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }

    println!("{}", book.title);
    if let Some(subtitle) = book.subtitle.as_deref().filter(|s| !s.is_empty()) {
        println!("{}", subtitle);
    }
    println!();
    println!("Author:    {}", book.author);
    println!("Publisher: {}", book.publisher);
    println!("Pages:     {}", book.pages);
    println!(
        "Published: {}",
        book.published_date()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| book.published.clone())
    );
    println!("ISBN:      {}", book.isbn);
    println!("Website:   {}", book.website);
    println!();
    println!("{}", book.description);
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Validating: {}", input.display());

    let drafts = read_drafts(input)?;
    let mut invalid = 0;

    for (i, draft) in drafts.iter().enumerate() {
        let report = validate(draft);
        if report.is_valid() {
            println!("Draft {} valid", i);
        } else {
            invalid += 1;
            println!("Draft {} invalid:", i);
            for err in report.errors() {
                println!("   - {}", err);
            }
        }
    }

    eprintln!(
        "Results: {} valid, {} invalid",
        drafts.len() - invalid,
        invalid
    );

    if invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_batch(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Collecting drafts from: {}", input.display());

    let drafts = read_drafts(input)?;
    let mut batch = DraftBatch::new();

    for (i, draft) in drafts.iter().enumerate() {
        match accept(draft) {
            Ok(valid) => {
                let size = batch.add_to_batch(valid);
                eprintln!("   + draft {} added (batch size {})", i, size);
            }
            Err(report) => {
                eprintln!("   - draft {} rejected: {}", i, report);
            }
        }
    }

    let mut sink = LoggingSink::new();
    match batch.finalize(&mut sink)? {
        FinalizeOutcome::Submitted(receipt) => {
            eprintln!("Submitted {} books", receipt.accepted);
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        FinalizeOutcome::NothingToSubmit => {
            return Err("No valid drafts to submit".into());
        }
    }

    Ok(())
}

/// Read one draft object or an array of drafts.
fn read_drafts(path: &Path) -> Result<Vec<BookDraft>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let drafts = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<BookDraft>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(drafts)
}

fn print_books(books: &[Book], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
        return Ok(());
    }
    for book in books {
        println!("{:<14} {} by {}", book.isbn, book.title, book.author);
    }
    Ok(())
}
