//! Manufacturer dropdown with an inline "create new" flow.

use leptos::prelude::*;
use records::Manufacturer;

use crate::net::api;
use crate::util::form::{parse_id, required};

#[component]
pub fn ManufacturerSelector(selected: RwSignal<Option<Manufacturer>>) -> impl IntoView {
    let manufacturers = RwSignal::new(Vec::<Manufacturer>::new());
    let creating = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(rows) = api::fetch_manufacturers(false).await {
                if selected.get_untracked().is_none() {
                    selected.set(rows.first().cloned());
                }
                manufacturers.set(rows);
            }
        });
    });

    let on_change = move |ev: leptos::ev::Event| {
        let id = parse_id(&event_target_value(&ev));
        selected.set(id.and_then(|id| manufacturers.get_untracked().into_iter().find(|m| m.id == id)));
    };

    let create = Callback::new(move |name: String| {
        let name = match required("Manufacturer name", &name) {
            Ok(name) => name.to_owned(),
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match api::add_manufacturer(&name).await {
                Ok(created) => {
                    manufacturers.update(|list| {
                        list.push(created.clone());
                        list.sort_by_key(|m| m.name.to_lowercase());
                    });
                    selected.set(Some(created));
                    creating.set(false);
                    new_name.set(String::new());
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <label class="dialog__label">
            "Manufacturer"
            <select
                class="dialog__input"
                prop:value=move || selected.get().map(|m| m.id.to_string()).unwrap_or_default()
                on:change=on_change
            >
                {move || {
                    manufacturers
                        .get()
                        .into_iter()
                        .map(|m| view! { <option value=m.id.to_string()>{m.name}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
        <Show
            when=move || creating.get()
            fallback=move || {
                view! {
                    <button class="btn btn--link" on:click=move |_| creating.set(true)>
                        "+ New manufacturer"
                    </button>
                }
            }
        >
            <div class="dialog__inline">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Manufacturer name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            create.run(event_target_value(&ev));
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| create.run(new_name.get_untracked())>
                    "Add"
                </button>
                <button class="btn" on:click=move |_| creating.set(false)>"Cancel"</button>
            </div>
        </Show>
        {move || error.get().map(|e| view! { <p class="dialog__error">{e}</p> })}
    }
}
