//! Manufacturer management with checkbox multi-delete.

use std::collections::BTreeSet;

use leptos::prelude::*;
use records::Manufacturer;

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::filter::filter_items;
use crate::util::form::required;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Add,
    Edit(i32),
}

#[component]
pub fn ManufacturerModal(on_close: Callback<()>) -> impl IntoView {
    let manufacturers = RwSignal::new(Vec::<Manufacturer>::new());
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(BTreeSet::<i32>::new());
    let reload = RwSignal::new(0_u32);
    let form = RwSignal::new(None::<Form>);
    let name = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_manufacturers(false).await {
                Ok(rows) => manufacturers.set(rows),
                Err(_) => status.set(Some(Status::Error("Failed to load manufacturers".to_owned()))),
            }
        });
    });

    let submit = move |_| {
        let Some(current) = form.get_untracked() else {
            return;
        };
        let text = match name.with_untracked(|n| required("Name", n).map(ToOwned::to_owned)) {
            Ok(text) => text,
            Err(message) => {
                status.set(Some(Status::Error(message)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = match current {
                Form::Add => api::add_manufacturer(&text).await.map(|m| format!("Added {}", m.name)),
                Form::Edit(id) => api::update_manufacturer(id, &text).await,
            };
            if result.is_ok() {
                form.set(None);
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to save manufacturer")));
        });
    };

    let remove_selected = Callback::new(move |()| {
        confirming.set(false);
        let ids: Vec<i32> = selected.get_untracked().into_iter().collect();
        leptos::task::spawn_local(async move {
            let result = api::delete_manufacturers(ids).await;
            if result.is_ok() {
                selected.set(BTreeSet::new());
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to remove manufacturers")));
        });
    });

    let rows = move || {
        filter_items(&manufacturers.get(), &search.get(), |m: &Manufacturer| m.name.clone())
            .into_iter()
            .map(|manufacturer| {
                let id = manufacturer.id;
                let label = manufacturer.name.clone();
                view! {
                    <tr>
                        <td>
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&id))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected.update(|s| {
                                        if checked {
                                            s.insert(id);
                                        } else {
                                            s.remove(&id);
                                        }
                                    });
                                }
                            />
                        </td>
                        <td>{manufacturer.name}</td>
                        <td>
                            <button
                                class="btn"
                                on:click=move |_| {
                                    name.set(label.clone());
                                    form.set(Some(Form::Edit(id)));
                                }
                            >
                                "Edit"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Manufacturers".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search manufacturers"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        name.set(String::new());
                        form.set(Some(Form::Add));
                    }
                >
                    "Add Manufacturer"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || selected.with(BTreeSet::is_empty)
                    on:click=move |_| confirming.set(true)
                >
                    "Remove Manufacturer"
                </button>
            </div>
            <Show when=move || confirming.get()>
                <Confirm
                    prompt=format!(
                        "Remove {} manufacturer(s)? Their bottles will be deleted too.",
                        selected.with_untracked(BTreeSet::len),
                    )
                    on_yes=remove_selected
                    on_no=Callback::new(move |()| confirming.set(false))
                />
            </Show>
            <Show when=move || form.get().is_some()>
                <div class="dialog__form">
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| form.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" on:click=submit>"Save"</button>
                    </div>
                </div>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Manufacturer"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Dialog>
    }
}
