//! Routed pages.
//!
//! - [`Homepage`] - `/` and `/homepage`
//! - [`SearchPage`] - `/search`
//! - [`BookDetail`] - `/category/:isbn`
//! - [`NotFound`] - everything else

mod homepage;
mod search;
mod book_detail;
mod not_found;

pub use homepage::*;
pub use search::*;
pub use book_detail::*;
pub use not_found::*;
