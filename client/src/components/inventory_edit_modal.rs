//! Edit one bottle: sticker, product number, location, manufacturer, MSDS,
//! and dead/alive status.

#[cfg(test)]
#[path = "inventory_edit_modal_test.rs"]
mod inventory_edit_modal_test;

use leptos::prelude::*;
use records::{Bottle, InventoryPatch, Manufacturer};

use crate::components::dialog::Dialog;
use crate::components::location_selector::LocationSelector;
use crate::components::manufacturer_selector::ManufacturerSelector;
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::form::{optional_text, parse_sticker, required_id};

/// Build the update payload from the form fields.
///
/// # Errors
///
/// Returns a user-facing message for a bad sticker or a missing selection.
pub fn build_patch(
    sticker: &str,
    product_number: &str,
    sub_location_id: Option<i32>,
    manufacturer_id: Option<i32>,
    msds: bool,
) -> Result<InventoryPatch, String> {
    Ok(InventoryPatch {
        sticker_number: Some(parse_sticker(sticker)?),
        product_number: Some(optional_text(product_number).unwrap_or_default()),
        sub_location_id: Some(required_id("Sub-Location", sub_location_id)?),
        manufacturer_id: Some(required_id("Manufacturer", manufacturer_id)?),
        msds: Some(msds),
    })
}

#[component]
pub fn InventoryEditModal(bottle: Bottle, on_close: Callback<()>) -> impl IntoView {
    let id = bottle.id;
    let dead = bottle.dead;
    let sticker = RwSignal::new(bottle.sticker.to_string());
    let product_number = RwSignal::new(bottle.product_number.clone().unwrap_or_default());
    let location_id = RwSignal::new(None::<i32>);
    let sub_location_id = RwSignal::new(Some(bottle.sub_location_id));
    let manufacturer = RwSignal::new(Some(Manufacturer { id: bottle.manufacturer_id, name: bottle.manufacturer.clone() }));
    let msds = RwSignal::new(bottle.msds);
    let status = RwSignal::new(None::<Status>);

    let save = move |_| {
        let patch = build_patch(
            &sticker.get_untracked(),
            &product_number.get_untracked(),
            sub_location_id.get_untracked(),
            manufacturer.get_untracked().map(|m| m.id),
            msds.get_untracked(),
        );
        let patch = match patch {
            Ok(patch) => patch,
            Err(message) => {
                status.set(Some(Status::Error(message)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match api::update_inventory(id, &patch).await {
                Ok(_) => on_close.run(()),
                Err(message) => status.set(Some(Status::Error(message))),
            }
        });
    };

    let toggle_dead = move |_| {
        leptos::task::spawn_local(async move {
            match api::set_dead(id, !dead).await {
                Ok(_) => on_close.run(()),
                Err(_) => status.set(Some(Status::Error("Failed to update bottle status".to_owned()))),
            }
        });
    };

    view! {
        <Dialog title=format!("Edit Bottle {}", bottle.sticker) on_close=on_close>
            <StatusMessage status=status/>
            <label class="dialog__label">
                "Sticker Number"
                <input
                    class="dialog__input"
                    type="number"
                    prop:value=move || sticker.get()
                    on:input=move |ev| sticker.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Product Number"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || product_number.get()
                    on:input=move |ev| product_number.set(event_target_value(&ev))
                />
            </label>
            <LocationSelector location_id=location_id sub_location_id=sub_location_id/>
            <ManufacturerSelector selected=manufacturer/>
            <label class="dialog__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || msds.get()
                    on:change=move |ev| msds.set(event_target_checked(&ev))
                />
                "MSDS on file"
            </label>
            <div class="dialog__actions">
                <button class="btn btn--danger" on:click=toggle_dead>
                    {if dead { "Mark Alive" } else { "Mark Dead" }}
                </button>
                <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button class="btn btn--primary" on:click=save>"Save"</button>
            </div>
        </Dialog>
    }
}
