//! Sub-location management: search, add, rename/move, and checkbox
//! multi-delete.

use std::collections::BTreeSet;

use leptos::prelude::*;
use records::{Location, SubLocationDetail};

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::filter::filter_items;
use crate::util::form::{parse_id, required, required_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Add,
    Edit(i32),
}

#[component]
pub fn SubLocationModal(on_close: Callback<()>) -> impl IntoView {
    let rows = RwSignal::new(Vec::<SubLocationDetail>::new());
    let locations = RwSignal::new(Vec::<Location>::new());
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(BTreeSet::<i32>::new());
    let reload = RwSignal::new(0_u32);
    let form = RwSignal::new(None::<Form>);
    let name = RwSignal::new(String::new());
    let location_id = RwSignal::new(None::<i32>);
    let confirming = RwSignal::new(false);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_sublocations().await {
                Ok(found) => rows.set(found),
                Err(_) => status.set(Some(Status::Error("Failed to load sub-locations".to_owned()))),
            }
            if let Ok(found) = api::fetch_locations().await {
                locations.set(found);
            }
        });
    });

    let open_form = move |next: Form, row: Option<&SubLocationDetail>| {
        name.set(row.map(|r| r.sub_location_name.clone()).unwrap_or_default());
        location_id.set(row.map(|r| r.location_id).or_else(|| locations.with_untracked(|l| l.first().map(|l| l.location_id))));
        form.set(Some(next));
    };

    let submit = move |_| {
        let Some(current) = form.get_untracked() else {
            return;
        };
        let checked = name.with_untracked(|n| required("Name", n).map(ToOwned::to_owned))
            .and_then(|n| required_id("Location", location_id.get_untracked()).map(|l| (n, l)));
        let (text, parent) = match checked {
            Ok(pair) => pair,
            Err(message) => {
                status.set(Some(Status::Error(message)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = match current {
                Form::Add => api::create_sublocation(&text, parent).await,
                Form::Edit(id) => api::update_sublocation(id, &text, parent).await,
            };
            if result.is_ok() {
                form.set(None);
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to save sub-location")));
        });
    };

    let delete_selected = Callback::new(move |()| {
        confirming.set(false);
        let ids: Vec<i32> = selected.get_untracked().into_iter().collect();
        leptos::task::spawn_local(async move {
            let result = api::delete_sublocations(&ids).await;
            if result.is_ok() {
                selected.set(BTreeSet::new());
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to delete sub-locations")));
        });
    });

    let label = |r: &SubLocationDetail| format!("{} {} {}", r.sub_location_name, r.building, r.room);
    let table_rows = move || {
        filter_items(&rows.get(), &search.get(), label)
            .into_iter()
            .map(|row| {
                let id = row.sub_location_id;
                let sub_name = row.sub_location_name.clone();
                let parent = records::location_label(&row.building, &row.room);
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
                        <td>{sub_name}</td>
                        <td>{parent}</td>
                        <td>
                            <button class="btn" on:click=move |_| open_form(Form::Edit(id), Some(&row))>
                                "Edit"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Sub Locations".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search sub-locations"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| open_form(Form::Add, None)>
                    "Add Sub Location"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || selected.with(BTreeSet::is_empty)
                    on:click=move |_| confirming.set(true)
                >
                    "Delete Selected"
                </button>
            </div>
            <Show when=move || confirming.get()>
                <Confirm
                    prompt="Delete the selected sub-locations and their bottles?"
                    on_yes=delete_selected
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
                    <label class="dialog__label">
                        "Location"
                        <select
                            class="dialog__input"
                            prop:value=move || location_id.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| location_id.set(parse_id(&event_target_value(&ev)))
                        >
                            {move || {
                                locations
                                    .get()
                                    .into_iter()
                                    .map(|l| {
                                        let text = l.label();
                                        view! { <option value=l.location_id.to_string()>{text}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
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
                        <th>"Sub Location"</th>
                        <th>"Location"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{table_rows}</tbody>
            </table>
        </Dialog>
    }
}
