//! Storage class dropdown.

use leptos::prelude::*;
use records::StorageClass;

use crate::net::api;
use crate::util::form::parse_id;

#[component]
pub fn StorageClassSelector(selected: RwSignal<Option<i32>>) -> impl IntoView {
    let classes = RwSignal::new(Vec::<StorageClass>::new());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(rows) = api::fetch_storage_classes().await {
                if selected.get_untracked().is_none() {
                    selected.set(rows.first().map(|c| c.id));
                }
                classes.set(rows);
            }
        });
    });

    view! {
        <label class="dialog__label">
            "Storage Class"
            <select
                class="dialog__input"
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| selected.set(parse_id(&event_target_value(&ev)))
            >
                {move || {
                    classes
                        .get()
                        .into_iter()
                        .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
