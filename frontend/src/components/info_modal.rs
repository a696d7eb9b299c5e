use leptos::*;

use crate::config::INFO_MODAL_TITLE;
use crate::types::InfoTopic;

/// Static information dialog opened from the footer.
#[component]
pub fn InfoModal(
    topic: InfoTopic,
    set_topic: WriteSignal<Option<InfoTopic>>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <div class="modal-card-header">{INFO_MODAL_TITLE}</div>
                <div class="modal-card-body">
                    <div class="card">
                        <div class="card-header">{topic.title()}</div>
                        <div class="card-body">{topic.text()}</div>
                    </div>
                </div>
                <div class="modal-card-actions">
                    <button class="btn btn-primary" on:click=move |_| set_topic.set(None)>
                        <strong>"Close"</strong>
                    </button>
                </div>
            </div>
        </div>
    }
}
