//! Shelf-by-shelf inventory walkthrough.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user picks a sub-location, scans every sticker on it, and completes
//! the shelf. Scanned bottles that belong elsewhere are relocated on the
//! spot; live bottles that were never scanned are marked dead in one batch.

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::location_selector::LocationSelector;
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::state::audit::AuditState;

#[component]
pub fn InventoryAuditModal(on_close: Callback<()>) -> impl IntoView {
    let audit = RwSignal::new(AuditState::default());
    let location_id = RwSignal::new(None::<i32>);
    let sub_location_id = RwSignal::new(None::<i32>);
    let sticker = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let status = RwSignal::new(None::<Status>);

    let start = move |_| {
        let Some(sub) = sub_location_id.get_untracked() else {
            status.set(Some(Status::Error("Sub Location is required".to_owned())));
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::bottles_in_sublocation(sub).await {
                Ok(bottles) => {
                    audit.update(|a| a.start(sub, bottles));
                    status.set(None);
                }
                Err(_) => status.set(Some(Status::Error("Failed to load bottles".to_owned()))),
            }
            busy.set(false);
        });
    };

    let scan = move |raw: String| {
        let raw = raw.trim().to_owned();
        if raw.is_empty() {
            return;
        }
        sticker.set(String::new());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::sticker_lookup(&raw).await {
                Ok(Some(found)) => {
                    let here = audit.with_untracked(|a| a.needs_move(&found).then_some(a.sub_location_id)).flatten();
                    let moved = match here {
                        Some(target) => api::relocate(found.inventory_id, target).await.is_ok(),
                        None => false,
                    };
                    if here.is_some() && !moved {
                        status.set(Some(Status::Error(format!("Failed to move sticker {raw}"))));
                    } else {
                        audit.update(|a| a.record(&raw, &found, moved));
                    }
                }
                Ok(None) => audit.update(|a| a.record_unknown(&raw)),
                Err(_) => status.set(Some(Status::Error("Failed to look up sticker".to_owned()))),
            }
            busy.set(false);
        });
    };

    let complete = move |_| {
        let Some(sub) = audit.with_untracked(|a| a.sub_location_id) else {
            return;
        };
        let missing = audit.with_untracked(AuditState::unscanned);
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::mark_many_dead(sub, missing).await;
            if result.is_ok() {
                audit.set(AuditState::default());
            }
            status.set(Some(Status::from_result(result, "Failed to complete sub-location")));
            busy.set(false);
        });
    };

    let shelf_rows = move || {
        audit.with(|a| {
            a.expected
                .iter()
                .map(|bottle| {
                    let done = a.is_scanned(bottle.inventory_id);
                    view! {
                        <tr class:table__row--done=done>
                            <td>{bottle.sticker_number}</td>
                            <td>{bottle.chemical_name.clone()}</td>
                            <td>{if done { "Scanned" } else { "" }}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Dialog title="Inventory".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <Show
                when=move || audit.with(|a| a.sub_location_id.is_some())
                fallback=move || {
                    view! {
                        <LocationSelector location_id=location_id sub_location_id=sub_location_id/>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" disabled=move || busy.get() on:click=start>
                                "Start"
                            </button>
                        </div>
                    }
                }
            >
                <label class="dialog__label">
                    "Sticker Number"
                    <input
                        class="dialog__input"
                        type="text"
                        autofocus=true
                        prop:value=move || sticker.get()
                        on:input=move |ev| sticker.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                scan(event_target_value(&ev));
                            }
                        }
                    />
                </label>
                <ul class="dialog__log">
                    {move || {
                        audit
                            .with(|a| a.log.iter().rev().map(|s| s.message()).collect::<Vec<_>>())
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Sticker #"</th>
                            <th>"Chemical"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{shelf_rows}</tbody>
                </table>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| audit.set(AuditState::default())>"Change Sub Location"</button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=complete>
                        "Complete Sub Location"
                    </button>
                </div>
            </Show>
        </Dialog>
    }
}
