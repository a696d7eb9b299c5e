//! Homepage carousel of featured book descriptions.
//!
//! Slides advance on a timer; the previous/next controls and the indicators
//! move to a slide directly.

use bookstore::Book;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::config::{CAROUSEL_INTERVAL_MS, COVER_IMAGE};

#[component]
pub fn FeaturedCarousel(books: Vec<Book>) -> impl IntoView {
    let count = books.len();
    let (active, set_active) = create_signal(0usize);

    let step = move |delta: isize| {
        if count == 0 {
            return;
        }
        set_active.update(|i| *i = next_index(*i, delta, count));
    };

    // Auto-rotate; the interval is cancelled when the carousel unmounts
    if count > 1 {
        let interval = Interval::new(CAROUSEL_INTERVAL_MS, move || step(1));
        on_cleanup(move || drop(interval));
    }

    let slides = books
        .into_iter()
        .enumerate()
        .map(|(index, book)| {
            view! {
                <div class="carousel-slide" class:active=move || active.get() == index>
                    <div class="carousel-image">
                        <img src=COVER_IMAGE alt="Book Cover"/>
                    </div>
                    <div class="carousel-text">{book.description}</div>
                </div>
            }
        })
        .collect_view();

    let indicators = (0..count)
        .map(|index| {
            view! {
                <button
                    class="carousel-indicator"
                    class:active=move || active.get() == index
                    on:click=move |_| set_active.set(index)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <button class="carousel-control prev" on:click=move |_| step(-1)>"‹"</button>
            <div class="carousel-slides">{slides}</div>
            <button class="carousel-control next" on:click=move |_| step(1)>"›"</button>
            <div class="carousel-indicators">{indicators}</div>
        </div>
    }
}

/// Slide reached by moving `delta` from `current`, wrapping at both ends.
fn next_index(current: usize, delta: isize, count: usize) -> usize {
    (current as isize + delta).rem_euclid(count as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 1, 3), 1);
        assert_eq!(next_index(2, 1, 3), 0);
        assert_eq!(next_index(0, -1, 3), 2);
    }
}
