use leptos::*;
use leptos_router::use_location;

use crate::types::breadcrumb;

/// Current route, shown faded above the page content.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let location = use_location();
    let label = move || location.pathname.with(|path| breadcrumb(path));

    view! {
        <div class="breadcrumb">
            <strong>{label}</strong>
        </div>
    }
}
