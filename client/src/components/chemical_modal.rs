//! Read-only chemical view: storage class, formula, bottle table, and a
//! PubChem description panel. Editors can open a bottle in
//! `InventoryEditModal`, which is stacked on top of this dialog.

use leptos::prelude::*;
use records::{Bottle, Chemical};

use crate::components::dialog::Dialog;
use crate::components::inventory_edit_modal::InventoryEditModal;
use crate::net::api;
use crate::net::pubchem::{self, CompoundSummary};
use crate::state::auth::AuthState;

#[component]
pub fn ChemicalModal(chemical_id: i32, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chemical = RwSignal::new(None::<Chemical>);
    let error = RwSignal::new(None::<String>);
    let show_dead = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);
    let editing = RwSignal::new(None::<Bottle>);
    let summary = RwSignal::new(None::<CompoundSummary>);
    let summary_requested = RwSignal::new(false);

    Effect::new(move || {
        let dead = show_dead.get();
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_chemical(chemical_id, dead).await {
                Ok(found) => {
                    if !summary_requested.get_untracked() {
                        summary_requested.set(true);
                        let name = found.chemical_name.clone();
                        leptos::task::spawn_local(async move {
                            summary.set(pubchem::fetch_summary(&name).await);
                        });
                    }
                    chemical.set(Some(found));
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let title = Signal::derive(move || chemical.with(|c| c.as_ref().map(|c| c.chemical_name.clone()).unwrap_or_default()));
    let close_editor = Callback::new(move |()| {
        editing.set(None);
        reload.update(|n| *n += 1);
    });

    let rows = move || {
        chemical
            .get()
            .map(|c| c.inventory)
            .unwrap_or_default()
            .into_iter()
            .map(|bottle| {
                let target = bottle.clone();
                view! {
                    <tr class:table__row--dead=bottle.dead>
                        <td>{bottle.sticker}</td>
                        <td>{bottle.product_number.unwrap_or_default()}</td>
                        <td>{bottle.location}</td>
                        <td>{bottle.sub_location}</td>
                        <td>{bottle.manufacturer}</td>
                        <td>
                            <Show when=move || auth.get().can_edit()>
                                {
                                    let target = target.clone();
                                    view! {
                                        <button class="btn" on:click=move |_| editing.set(Some(target.clone()))>
                                            "Edit"
                                        </button>
                                    }
                                }
                            </Show>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title=title on_close=on_close class="dialog--wide">
            {move || error.get().map(|e| view! { <p class="dialog__error">{e}</p> })}
            {move || {
                chemical
                    .get()
                    .map(|c| {
                        view! {
                            <p>"Storage Class: " {c.storage_class}</p>
                            <p>"Chemical Formula: " {c.formula.unwrap_or_default()}</p>
                        }
                    })
            }}
            <label class="dialog__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || show_dead.get()
                    on:change=move |ev| show_dead.set(event_target_checked(&ev))
                />
                "Show dead bottles"
            </label>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Sticker #"</th>
                        <th>"Product #"</th>
                        <th>"Location"</th>
                        <th>"Sub-Location"</th>
                        <th>"Manufacturer"</th>
                        <th>"Edit"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {move || summary.get().map(|s| view! { <PubChemPanel summary=s/> })}
        </Dialog>
        {move || editing.get().map(|bottle| view! { <InventoryEditModal bottle=bottle on_close=close_editor/> })}
    }
}

#[component]
fn PubChemPanel(summary: CompoundSummary) -> impl IntoView {
    let alt = summary.title.clone().unwrap_or_else(|| "Structure".to_owned());
    view! {
        <section class="pubchem">
            <img class="pubchem__image" src=summary.image_url alt=alt/>
            <div class="pubchem__text">
                {summary.title.map(|t| view! { <h3>{t}</h3> })}
                {summary.description.map(|d| view! { <p>{d}</p> })}
                {summary.source.map(|s| view! { <p class="pubchem__source">"Source: " {s} " via PubChem"</p> })}
            </div>
        </section>
    }
}
