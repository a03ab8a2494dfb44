//! Storage class management. Deleting a class moves its chemicals to
//! "Unknown" on the server.

use leptos::prelude::*;
use records::StorageClass;

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
pub fn StorageClassModal(on_close: Callback<()>) -> impl IntoView {
    let classes = RwSignal::new(Vec::<StorageClass>::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let form = RwSignal::new(None::<Form>);
    let name = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<i32>);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_storage_classes().await {
                Ok(rows) => classes.set(rows),
                Err(_) => status.set(Some(Status::Error("Failed to load storage classes".to_owned()))),
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
                Form::Add => api::create_storage_class(&text).await,
                Form::Edit(id) => api::update_storage_class(id, &text).await,
            };
            let result = result.map(|saved| format!("Saved {}", saved.name));
            if result.is_ok() {
                form.set(None);
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to save storage class")));
        });
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            let result = api::delete_storage_class(id).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to delete storage class")));
        });
    });

    let rows = move || {
        filter_items(&classes.get(), &search.get(), |c: &StorageClass| c.name.clone())
            .into_iter()
            .map(|class| {
                let id = class.id;
                let label = class.name.clone();
                view! {
                    <tr>
                        <td>{class.name}</td>
                        <td class="table__actions">
                            <button
                                class="btn"
                                on:click=move |_| {
                                    name.set(label.clone());
                                    form.set(Some(Form::Edit(id)));
                                }
                            >
                                "Edit"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| deleting.set(Some(id))>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Storage Classes".to_owned() on_close=on_close>
            <StatusMessage status=status/>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search storage classes"
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
                    "Add Storage Class"
                </button>
            </div>
            <Show when=move || deleting.get().is_some()>
                <Confirm
                    prompt="Delete this storage class? Its chemicals will be moved to Unknown."
                    on_yes=confirm_delete
                    on_no=Callback::new(move |()| deleting.set(None))
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
                        <th>"Storage Class"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Dialog>
    }
}
