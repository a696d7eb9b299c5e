use leptos::*;

use crate::components::{BookGrid, FeaturedCarousel, Footer};
use crate::config::{FEATURED_COUNT, PUBLICATIONS_TEXT};
use crate::services::use_catalog;

#[component]
pub fn Homepage() -> impl IntoView {
    let catalog = use_catalog();
    let featured = catalog.featured(FEATURED_COUNT).to_vec();
    let books = catalog.books().to_vec();

    view! {
        <div class="homepage">
            <div class="carousel-container">
                <FeaturedCarousel books=featured/>
            </div>
            <div class="publications">
                <h2>"Bookstore Publications"</h2>
                <p>{PUBLICATIONS_TEXT}</p>
            </div>
            <div class="new-arrivals">
                <div class="new-arrivals-title">"New Arrivals"</div>
                <BookGrid books=Signal::derive(move || books.clone())/>
            </div>
            <Footer/>
        </div>
    }
}
