use leptos::*;
use leptos_router::*;

use crate::config::APP_NAME;
use crate::types::NAV_LINKS;

#[component]
pub fn Navbar(set_show_add_book: WriteSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();

    let on_title_click = move |_| navigate("/", Default::default());

    view! {
        <nav class="navbar">
            <div class="navbar-header">
                <h2 class="navbar-title" on:click=on_title_click>{APP_NAME}</h2>
            </div>
            <div class="navbar-right">
                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let path = link.path;
                            view! {
                                <A href=path class="navbar-link">
                                    <strong>{link.title}</strong>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="navbar-add">
                    <button
                        class="btn btn-light"
                        on:click=move |_| {
                            log::debug!("Opening add book form");
                            set_show_add_book.set(true);
                        }
                    >
                        <strong>"Add new book"</strong>
                    </button>
                </div>
            </div>
        </nav>
    }
}
