use leptos::*;
use leptos_router::use_params_map;

use crate::components::{BookGrid, Breadcrumb, Footer};
use crate::config::COVER_IMAGE;
use crate::services::use_catalog;
use crate::types::published_label;

/// Detail page of the book whose ISBN is in the route.
#[component]
pub fn BookDetail() -> impl IntoView {
    let catalog = use_catalog();
    let params = use_params_map();
    let isbn = create_memo(move |_| params.with(|p| p.get("isbn").cloned().unwrap_or_default()));

    let book = {
        let catalog = catalog.clone();
        create_memo(move |_| isbn.with(|isbn| catalog.find_by_isbn(isbn).cloned()))
    };
    let related = create_memo(move |_| isbn.with(|isbn| catalog.related(isbn)));

    let top = create_node_ref::<html::Div>();

    // Bring the details into view whenever another book is opened
    create_effect(move |_| {
        let found = book.with(Option::is_some);
        if let (true, Some(el)) = (found, top.get()) {
            el.scroll_into_view();
        }
    });

    view! {
        <Show
            when=move || book.with(Option::is_some)
            fallback=|| view! {
                <div class="not-found"><h2>"Book not found!"</h2></div>
            }
        >
            <div class="category" node_ref=top>
                <Breadcrumb/>
                {move || book.get().map(|book| view! {
                    <div class="book-details-container">
                        <div class="book-image">
                            <img src=COVER_IMAGE alt="Book Cover"/>
                        </div>
                        <div class="book-details">
                            <h2>{book.title.clone()}</h2>
                            {book.subtitle.clone().filter(|s| !s.is_empty()).map(|s| view! { <h4>{s}</h4> })}
                            <p>"Author: " {book.author.clone()}</p>
                            <p>"Publisher: " {book.publisher.clone()}</p>
                            <p>"Pages: " {book.pages}</p>
                            <p>"Published: " {published_label(&book)}</p>
                            <p class="book-description">"Description: " {book.description.clone()}</p>
                            <a href=book.website.clone() target="_blank" rel="noopener noreferrer">
                                "Visit Website"
                            </a>
                        </div>
                    </div>
                    <div class="author-name">
                        <h3>{book.author.clone()}</h3>
                    </div>
                })}
                <div class="other-books">
                    <div class="other-books-title">
                        <h3>"Other books you may like"</h3>
                    </div>
                    <BookGrid books=related/>
                </div>
                <Footer/>
            </div>
        </Show>
    }
}
