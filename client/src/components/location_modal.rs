//! Location list management: search, add, edit, delete.

use leptos::prelude::*;
use records::{Location, LocationInput};

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::filter::filter_items;

/// Which form the dialog is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Add,
    Edit(i32),
}

#[component]
pub fn LocationModal(on_close: Callback<()>) -> impl IntoView {
    let locations = RwSignal::new(Vec::<Location>::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let form = RwSignal::new(None::<Form>);
    let building = RwSignal::new(String::new());
    let room = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<i32>);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_locations().await {
                Ok(rows) => locations.set(rows),
                Err(_) => status.set(Some(Status::Error("Failed to load locations".to_owned()))),
            }
        });
    });

    let open_form = move |next: Form, location: Option<&Location>| {
        building.set(location.map(|l| l.building.clone()).unwrap_or_default());
        room.set(location.map(|l| l.room.clone()).unwrap_or_default());
        form.set(Some(next));
    };

    let submit = move |_| {
        let Some(current) = form.get_untracked() else {
            return;
        };
        let body = LocationInput { building: building.get_untracked(), room: room.get_untracked() };
        leptos::task::spawn_local(async move {
            let result = match current {
                Form::Add => api::create_location(&body).await,
                Form::Edit(id) => api::update_location(id, &body).await,
            };
            if result.is_ok() {
                form.set(None);
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to save location")));
        });
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            let result = api::delete_location(id).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to delete location")));
        });
    });

    let rows = move || {
        filter_items(&locations.get(), &search.get(), Location::label)
            .into_iter()
            .map(|location| {
                let id = location.location_id;
                let label = location.label();
                let building_name = location.building.clone();
                let room_name = location.room.clone();
                let subs = location.sub_locations.len();
                view! {
                    <tr>
                        <td>{building_name}</td>
                        <td>{room_name}</td>
                        <td>{subs}</td>
                        <td>
                            <button class="btn" on:click=move |_| open_form(Form::Edit(id), Some(&location))>
                                "Edit"
                            </button>
                            <button class="btn btn--danger" title=label on:click=move |_| deleting.set(Some(id))>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Locations".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search locations"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| open_form(Form::Add, None)>
                    "Add Location"
                </button>
            </div>
            <Show when=move || form.get().is_some()>
                <div class="dialog__form">
                    <h3>{move || if form.get() == Some(Form::Add) { "Add Location" } else { "Edit Location" }}</h3>
                    <label class="dialog__label">
                        "Building"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || building.get()
                            on:input=move |ev| building.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Room"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || room.get()
                            on:input=move |ev| room.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| form.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" on:click=submit>"Save"</button>
                    </div>
                </div>
            </Show>
            <Show when=move || deleting.get().is_some()>
                <Confirm
                    prompt="Delete this location with its sub-locations and bottles?"
                    on_yes=confirm_delete
                    on_no=Callback::new(move |()| deleting.set(None))
                />
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Building"</th>
                        <th>"Room"</th>
                        <th>"Sub-Locations"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Dialog>
    }
}
