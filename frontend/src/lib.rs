//! Bookstore - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page application for browsing the book catalog and
//! collecting new book drafts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links, "Add new book")                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /, /homepage   Homepage (carousel, new arrivals)       │
//! │  ├── /search        SearchPage (filters, book grid)         │
//! │  └── /category/:isbn BookDetail (details, related books)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AddBookModal (when open)                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (NavLink, InfoTopic, AppError)
//! - [`components`] - UI components (Navbar, BookGrid, AddBookModal, etc.)
//! - [`pages`] - Routed pages
//! - [`services`] - Catalog context, image previews, batch submission

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Navigation
    breadcrumb, NavLink, NAV_LINKS,
    // Info
    InfoTopic,
    // Display
    format_date, published_label,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Bookstore - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_catalog();

    let (show_add_book, set_show_add_book) = create_signal(false);

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Navbar set_show_add_book=set_show_add_book/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Homepage/>
                    <Route path="/homepage" view=Homepage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/category/:isbn" view=BookDetail/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>

            <Show
                when=move || show_add_book.get()
                fallback=|| view! { }
            >
                <AddBookModal set_show=set_show_add_book/>
            </Show>
        </Router>
    }
}
