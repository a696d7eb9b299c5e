//! Add-book modal: one draft form plus the batch of books added so far.
//!
//! Errors are shown per field once the field has been touched (blurred, or
//! every field after "Add Book"). "Submit All" finalizes the batch,
//! "Close" cancels it.

use std::collections::HashSet;

use bookstore::{
    is_accepted_image_type, validate_field, BookDraft, DraftBatch, Field, FinalizeOutcome,
};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::IMAGE_ACCEPT;
use crate::services::{create_preview, image_attachment, submit_batch};

/// Text fields of the form, in display order.
const TEXT_FIELDS: [Field; 8] = [
    Field::Isbn,
    Field::Title,
    Field::Author,
    Field::Published,
    Field::Publisher,
    Field::Pages,
    Field::Description,
    Field::Website,
];

/// Error to display for `field`, if it was touched and is invalid.
pub fn visible_error(draft: &BookDraft, touched: &HashSet<Field>, field: Field) -> Option<String> {
    if !touched.contains(&field) {
        return None;
    }
    validate_field(draft, field).map(|e| e.message)
}

/// Name of the attached image and its preview URL, if one was created.
///
/// Files with an unaccepted type have no preview but can still be removed.
pub fn attached_image(batch: &DraftBatch) -> Option<(String, Option<String>)> {
    batch
        .current()
        .image
        .as_ref()
        .map(|image| (image.name.clone(), batch.preview_url().map(str::to_string)))
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Published => "date",
        Field::Pages => "number",
        Field::Website => "url",
        _ => "text",
    }
}

#[component]
pub fn AddBookModal(set_show: WriteSignal<bool>) -> impl IntoView {
    let batch = create_rw_signal(DraftBatch::new());
    let touched = create_rw_signal(HashSet::<Field>::new());
    let submitting = create_rw_signal(false);
    let (status, set_status) = create_signal(None::<String>);
    let file_input = create_node_ref::<html::Input>();

    let clear_file_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let touch = move |field: Field| {
        touched.update(|t| {
            t.insert(field);
        });
    };

    // Add the current draft to the batch
    let on_add = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        touched.update(|t| t.extend(Field::ALL));

        match batch.try_update(|b| b.submit_current()) {
            Some(Ok(size)) => {
                log::info!("📗 Book added ({} in batch)", size);
                touched.update(HashSet::clear);
                clear_file_input();
                set_status.set(None);
            }
            Some(Err(report)) => {
                log::debug!("Draft rejected: {}", report);
            }
            None => {}
        }
    };

    let on_image_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        // An empty pick clears the previous image
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            batch.update(|b| b.remove_image());
            return;
        };

        let attachment = image_attachment(&file);
        let preview = if is_accepted_image_type(&attachment.mime_type) {
            match create_preview(&file) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("⚠️ {}", e);
                    None
                }
            }
        } else {
            None
        };

        batch.update(|b| b.attach_image(attachment, preview));
        touch(Field::Image);
    };

    let on_remove_image = move |_| {
        batch.update(|b| b.remove_image());
        clear_file_input();
    };

    let on_submit_all = move |_| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        match batch.try_update(submit_batch) {
            Some(Ok(FinalizeOutcome::Submitted(receipt))) => {
                set_status.set(Some(format!("Submitted {} books", receipt.accepted)));
            }
            Some(Ok(FinalizeOutcome::NothingToSubmit)) => {
                set_status.set(Some("Nothing to submit".to_string()));
            }
            Some(Err(e)) => {
                log::error!("❌ {}", e);
                set_status.set(Some(e.to_string()));
            }
            None => {}
        }

        touched.update(HashSet::clear);
        clear_file_input();
        submitting.set(false);
    };

    let on_close = move |_| {
        batch.update(|b| b.cancel());
        set_show.set(false);
    };

    let field_error = move |field: Field| {
        move || {
            touched
                .with(|t| batch.with(|b| visible_error(b.current(), t, field)))
                .map(|msg| view! { <div class="validation-error">{msg}</div> })
        }
    };

    let text_inputs = TEXT_FIELDS
        .into_iter()
        .map(|field| {
            let value = move || batch.with(|b| b.current().value(field).to_string());
            let on_input = move |ev: Event| {
                let value = event_target_value(&ev);
                batch.update(|b| b.set_field(field, value));
            };

            let input = if field == Field::Description {
                view! {
                    <textarea
                        id=field.name()
                        name=field.name()
                        prop:value=value
                        on:input=on_input
                        on:blur=move |_| touch(field)
                    ></textarea>
                }
                .into_view()
            } else {
                view! {
                    <input
                        type=input_type(field)
                        id=field.name()
                        name=field.name()
                        prop:value=value
                        on:input=on_input
                        on:blur=move |_| touch(field)
                    />
                }
                .into_view()
            };

            view! {
                <div class="input-group">
                    <label for=field.name()>{field.label()}</label>
                    {input}
                    {field_error(field)}
                </div>
            }
        })
        .collect_view();

    let added_books = move || {
        batch.with(|b| {
            b.drafts()
                .iter()
                .enumerate()
                .map(|(i, d)| (i, d.title().to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <div class="modal-card-header">"Add a New Book"</div>
                <div class="modal-card-body">
                    <form class="add-book-form" on:submit=on_add>
                        <div class="add-book-fields">
                            {text_inputs}

                            <div class="input-group">
                                <label for="image">{Field::Image.label()}</label>
                                <input
                                    type="file"
                                    id="image"
                                    name="image"
                                    accept=IMAGE_ACCEPT
                                    node_ref=file_input
                                    on:change=on_image_change
                                />
                                {field_error(Field::Image)}
                                {move || {
                                    batch
                                        .with(attached_image)
                                        .map(|(name, url)| {
                                            view! {
                                                <div class="added-image">
                                                    {url.map(|url| view! {
                                                        <img src=url alt="Selected cover"/>
                                                    })}
                                                    <span class="image-name">{name}</span>
                                                    <button
                                                        type="button"
                                                        class="btn btn-danger"
                                                        on:click=on_remove_image
                                                    >
                                                        "Remove Image"
                                                    </button>
                                                </div>
                                            }
                                        })
                                }}
                            </div>
                        </div>

                        <div class="add-book-actions">
                            <button type="submit" class="btn btn-primary">
                                <strong>"Add Book"</strong>
                            </button>
                        </div>
                    </form>

                    <Show
                        when=move || batch.with(|b| !b.is_empty())
                        fallback=|| view! { }
                    >
                        <div class="book-list">
                            <h3>"Added Books"</h3>
                            <For
                                each=added_books
                                key=|(i, title)| (*i, title.clone())
                                children=move |(index, title)| {
                                    view! {
                                        <div class="book-list-item">
                                            <span>{title}</span>
                                            <button
                                                type="button"
                                                class="btn btn-danger"
                                                on:click=move |_| {
                                                    batch.update(|b| {
                                                        b.remove_from_batch(index);
                                                    });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <Show
                        when=move || status.get().is_some()
                        fallback=|| view! { }
                    >
                        <div class="status-message">{move || status.get().unwrap_or_default()}</div>
                    </Show>
                </div>
                <div class="modal-card-actions">
                    <button
                        class="btn btn-primary"
                        on:click=on_submit_all
                        disabled=move || submitting.get()
                    >
                        <strong>"Submit All"</strong>
                    </button>
                    <button class="btn btn-secondary" on:click=on_close>
                        <strong>"Close"</strong>
                    </button>
                </div>
            </div>
        </div>
    }
}
