//! Application configuration.
//!
//! Centralized constants for the bookstore frontend. Everything here is
//! static content; there is no backend to configure.

/// Application name shown in the navigation bar.
pub const APP_NAME: &str = "Book Store";

/// Header of the info modal.
pub const INFO_MODAL_TITLE: &str = "BookStore";

/// Cover image used for every book.
///
/// The catalog carries no images, so all covers share one static asset.
pub const COVER_IMAGE: &str = "/logo512.png";

/// Number of books rotated by the homepage carousel.
pub const FEATURED_COUNT: usize = 3;

/// Delay between two carousel slides (in milliseconds).
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// File types offered by the image picker.
pub const IMAGE_ACCEPT: &str = "image/jpeg,image/png,image/jpg";

// =============================================================================
// Contact details
// =============================================================================

pub const CONTACT_PHONE: &str = "2710000000";
pub const CONTACT_ADDRESS: &str = "Tripoli Avenue 70";
pub const CONTACT_MAP_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=Tripoli+Avenue+70";
pub const CONTACT_EMAIL: &str = "this@isnotemail.com";

// =============================================================================
// Static copy
// =============================================================================

/// Body of the "Bookstore Publications" section.
pub const PUBLICATIONS_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
    Enim autem esse tenetur exercitationem dolorem quae sint repellat, id sed in ea maiores \
    explicabo harum cum deleniti magnam recusandae perferendis inventore? Explicabo animi \
    incidunt sapiente unde eveniet, optio nam obcaecati quam placeat numquam molestias \
    provident velit aliquid voluptatum eos, nisi at molestiae, a labore dolore! Odio vero \
    voluptatum, corrupti, nesciunt laudantium perferendis consequuntur, ad minus earum libero \
    suscipit! Obcaecati magnam incidunt dolores natus, aliquid quisquam consectetur laudantium \
    culpa tempore voluptatum!";

/// Placeholder body of every info modal.
pub const INFO_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
    Enim autem esse tenetur exercitationem dolorem quae sint repellat, id sed in ea maiores \
    explicabo harum cum deleniti magnam recusandae perferendis inventore? Explicabo animi \
    incidunt sapiente unde eveniet, optio nam obcaecati quam placeat numquam molestias \
    provident velit aliquid voluptatum eos, nisi at molestiae.";
