//! UI Components for the bookstore application.
//!
//! # Layout Components
//! - [`Navbar`] - Title, navigation links and the "Add new book" button
//! - [`Breadcrumb`] - Current path, upper-cased
//! - [`Footer`] - Info links and contact details
//!
//! # Feature Components
//! - [`FeaturedCarousel`] - Auto-rotating featured books
//! - [`BookGrid`] - Grid of book covers linking to their detail page
//! - [`FilterForm`] - The four search inputs
//! - [`AddBookModal`] - Draft form and batch of added books
//! - [`InfoModal`] - Static information dialog

mod navbar;
mod breadcrumb;
mod carousel;
mod book_grid;
mod filter_form;
mod add_book;
mod info_modal;
mod footer;

pub use navbar::*;
pub use breadcrumb::*;
pub use carousel::*;
pub use book_grid::*;
pub use filter_form::*;
pub use add_book::*;
pub use info_modal::*;
pub use footer::*;
