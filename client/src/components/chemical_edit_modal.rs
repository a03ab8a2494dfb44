//! Edit a chemical's name, formula and storage class, or delete it.

#[cfg(test)]
#[path = "chemical_edit_modal_test.rs"]
mod chemical_edit_modal_test;

use leptos::prelude::*;
use records::ChemicalPatch;

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::components::storage_class_selector::StorageClassSelector;
use crate::net::api;
use crate::util::form::{required, required_id};

/// # Errors
///
/// Returns a user-facing message when the name or storage class is missing.
pub fn build_patch(name: &str, formula: &str, storage_class_id: Option<i32>) -> Result<ChemicalPatch, String> {
    Ok(ChemicalPatch {
        chemical_name: Some(required("Chemical Name", name)?.to_owned()),
        chemical_formula: Some(formula.trim().to_owned()),
        storage_class_id: Some(required_id("Storage Class", storage_class_id)?),
    })
}

#[component]
pub fn ChemicalEditModal(chemical_id: i32, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let formula = RwSignal::new(String::new());
    let storage_class = RwSignal::new(None::<i32>);
    let loaded = RwSignal::new(false);
    let confirming = RwSignal::new(false);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::fetch_chemical(chemical_id, false).await {
                Ok(found) => {
                    name.set(found.chemical_name);
                    formula.set(found.formula.unwrap_or_default());
                    storage_class.set(Some(found.storage_class_id));
                    loaded.set(true);
                }
                Err(message) => status.set(Some(Status::Error(message))),
            }
        });
    });

    let save = move |_| {
        let patch = match build_patch(&name.get_untracked(), &formula.get_untracked(), storage_class.get_untracked()) {
            Ok(patch) => patch,
            Err(message) => {
                status.set(Some(Status::Error(message)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = api::update_chemical(chemical_id, &patch).await;
            status.set(Some(Status::from_result(result, "Failed to update chemical")));
        });
    };

    let delete = Callback::new(move |()| {
        confirming.set(false);
        leptos::task::spawn_local(async move {
            match api::delete_chemical(chemical_id).await {
                Ok(_) => on_close.run(()),
                Err(_) => status.set(Some(Status::Error("Failed to delete chemical".to_owned()))),
            }
        });
    });

    view! {
        <Dialog title="Edit Chemical".to_owned() on_close=on_close>
            <StatusMessage status=status/>
            <Show when=move || loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <label class="dialog__label">
                    "Chemical Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Chemical Formula"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formula.get()
                        on:input=move |ev| formula.set(event_target_value(&ev))
                    />
                </label>
                <StorageClassSelector selected=storage_class/>
                <Show
                    when=move || confirming.get()
                    fallback=move || {
                        view! {
                            <div class="dialog__actions">
                                <button class="btn btn--danger" on:click=move |_| confirming.set(true)>
                                    "Delete"
                                </button>
                                <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                                <button class="btn btn--primary" on:click=save>"Save"</button>
                            </div>
                        }
                    }
                >
                    <Confirm
                        prompt="Delete this chemical and all of its bottles?"
                        on_yes=delete
                        on_no=Callback::new(move |()| confirming.set(false))
                    />
                </Show>
            </Show>
        </Dialog>
    }
}
