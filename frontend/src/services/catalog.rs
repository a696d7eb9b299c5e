//! Catalog shared with every page through the Leptos context.

use bookstore::Catalog;
use leptos::*;

/// Put the seed catalog into the context of the current owner.
pub fn provide_catalog() -> Catalog {
    let catalog = Catalog::seed();
    log::info!("📚 Catalog loaded ({} books)", catalog.len());
    provide_context(catalog.clone());
    catalog
}

/// Catalog from the context, or the seed catalog when none was provided.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>().unwrap_or_default()
}
