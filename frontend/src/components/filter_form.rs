use bookstore::{Criterion, FilterCriteria};
use leptos::*;

/// The four search inputs, bound to `criteria`.
#[component]
pub fn FilterForm(criteria: RwSignal<FilterCriteria>) -> impl IntoView {
    let inputs = Criterion::ALL
        .into_iter()
        .map(|criterion| {
            let input_type = match criterion {
                Criterion::Year => "date",
                _ => "text",
            };
            view! {
                <div class="input-group">
                    <label for=criterion.name()>{criterion.label()}</label>
                    <input
                        type=input_type
                        id=criterion.name()
                        name=criterion.name()
                        prop:value=move || criteria.with(|c| c.get(criterion).to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.set(criterion, value));
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="filters" on:submit=|ev| ev.prevent_default()>
            {inputs}
        </form>
    }
}
