use bookstore::FilterCriteria;
use leptos::*;

use crate::components::{BookGrid, Breadcrumb, FilterForm, Footer};
use crate::services::use_catalog;

#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = use_catalog();
    let (show_filters, set_show_filters) = create_signal(false);
    let criteria = create_rw_signal(FilterCriteria::default());

    // Recomputed only when the criteria change
    let results = create_memo(move |_| {
        let found = criteria.with(|c| catalog.filter(c));
        log::debug!("🔎 {} of {} books match", found.len(), catalog.len());
        found
    });

    view! {
        <div class="search">
            <div class="first-row">
                <Breadcrumb/>
                <div class="filter-button-container">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| set_show_filters.update(|shown| *shown = !*shown)
                    >
                        <strong>
                            {move || if show_filters.get() { "Hide Filters" } else { "Show Filters" }}
                        </strong>
                    </button>
                </div>
            </div>

            <Show
                when=move || show_filters.get()
                fallback=|| view! { }
            >
                <FilterForm criteria=criteria/>
            </Show>

            <BookGrid books=results/>
            <Footer/>
        </div>
    }
}
