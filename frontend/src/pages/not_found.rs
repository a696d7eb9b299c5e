use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found!"</h2>
            <A href="/homepage">"Back to the homepage"</A>
        </div>
    }
}
