use bookstore::Book;
use leptos::*;
use leptos_router::A;

use crate::config::COVER_IMAGE;

/// Grid of book covers; each one opens the book's detail page.
#[component]
pub fn BookGrid(#[prop(into)] books: Signal<Vec<Book>>) -> impl IntoView {
    view! {
        <div class="book-grid">
            <For
                each=move || books.get()
                key=|book| book.isbn.clone()
                children=move |book| {
                    view! {
                        <A href=book.detail_path() class="book-grid-item">
                            <img class="book-grid-image" src=COVER_IMAGE alt="Book Cover"/>
                            <h3 class="book-grid-title">{book.title.clone()}</h3>
                        </A>
                    }
                }
            />
            <Show
                when=move || books.with(|b| b.is_empty())
                fallback=|| view! { }
            >
                <div class="book-grid-empty">"No books match these filters"</div>
            </Show>
        </div>
    }
}
