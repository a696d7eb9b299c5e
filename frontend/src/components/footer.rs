//! Footer component

use leptos::*;

use crate::components::InfoModal;
use crate::config::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_MAP_URL, CONTACT_PHONE};
use crate::types::InfoTopic;

#[component]
pub fn Footer() -> impl IntoView {
    let (topic, set_topic) = create_signal(None::<InfoTopic>);

    let links = InfoTopic::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button class="footer-link" on:click=move |_| set_topic.set(Some(t))>
                    <strong>{t.title()}</strong>
                </button>
            }
        })
        .collect_view();

    view! {
        <footer>
            <div class="footer-company">
                <strong>"Bookstore"</strong>
            </div>
            <div class="footer-links">
                <div class="footer-title"><strong>"Links"</strong></div>
                {links}
            </div>
            <div class="footer-contact">
                <div class="footer-title"><strong>"Contact Details"</strong></div>
                <div class="contact">
                    <span class="contact-icon">"📞"</span>
                    <strong>{CONTACT_PHONE}</strong>
                </div>
                <div class="contact">
                    <span class="contact-icon">"📍"</span>
                    <a href=CONTACT_MAP_URL class="footer-link" target="_blank" rel="noopener noreferrer">
                        <strong>{CONTACT_ADDRESS}</strong>
                    </a>
                </div>
                <div class="contact">
                    <span class="contact-icon">"✉️"</span>
                    <a href=format!("mailto:{}", CONTACT_EMAIL) class="footer-link">
                        <strong>{CONTACT_EMAIL}</strong>
                    </a>
                </div>
            </div>

            {move || topic.get().map(|t| view! { <InfoModal topic=t set_topic=set_topic/> })}
        </footer>
    }
}
