//! Add Chemical wizard dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one step of `WizardState` at a time. Each step runs its lookup or
//! submission here and feeds the outcome back as a `WizardEvent`; the state
//! machine decides where to go next and remembers the way back.
//!
//! Enter-key handlers read the input's value from the key event itself, so a
//! lookup never runs against text that has not reached the signal yet.

use leptos::prelude::*;
use records::Manufacturer;

use crate::components::dialog::Dialog;
use crate::components::location_selector::LocationSelector;
use crate::components::manufacturer_selector::ManufacturerSelector;
use crate::components::storage_class_selector::StorageClassSelector;
use crate::net::api;
use crate::state::wizard::{Step, WizardEvent, WizardState};

fn on_enter(ev: &leptos::ev::KeyboardEvent, run: Callback<String>) {
    if ev.key() == "Enter" {
        ev.prevent_default();
        run.run(event_target_value(ev));
    }
}

#[component]
pub fn AddChemicalModal(on_close: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let suggestions = RwSignal::new(Vec::<String>::new());

    let manufacturer = RwSignal::new(None::<Manufacturer>);
    let storage_class = RwSignal::new(None::<i32>);
    let location_id = RwSignal::new(None::<i32>);
    let sub_location_id = RwSignal::new(None::<i32>);

    let advance = move |event: WizardEvent| {
        error.set(None);
        wizard.update(|w| {
            w.apply(event);
        });
    };

    let lookup_product = Callback::new(move |value: String| {
        wizard.update(|w| w.product_number.clone_from(&value));
        if value.is_empty() {
            advance(WizardEvent::ProductMissing);
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::product_number_lookup(&value).await;
            busy.set(false);
            match result {
                Ok(Some(found)) => {
                    manufacturer.set(Some(found.manufacturer.clone()));
                    advance(WizardEvent::ProductFound(found));
                }
                Ok(None) => advance(WizardEvent::ProductMissing),
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let suggest_products = move |value: String| {
        if value.trim().len() < 2 {
            suggestions.set(Vec::new());
            return;
        }
        leptos::task::spawn_local(async move {
            if let Ok(found) = api::product_search(&value).await {
                suggestions.set(found);
            }
        });
    };

    let lookup_name = Callback::new(move |value: String| {
        let name = value.trim().to_owned();
        wizard.update(|w| w.chemical_name.clone_from(&name));
        if name.is_empty() {
            error.set(Some("Chemical Name is required".to_owned()));
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::chemical_name_lookup(&name).await;
            busy.set(false);
            match result {
                Ok(Some(found)) => advance(WizardEvent::ChemicalFound(found)),
                Ok(None) => advance(WizardEvent::ChemicalMissing),
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let choose_manufacturer = move |_| match manufacturer.get_untracked() {
        Some(chosen) => advance(WizardEvent::ManufacturerChosen(chosen)),
        None => error.set(Some("Manufacturer is required".to_owned())),
    };

    let create_chemical = move |_| {
        wizard.update(|w| {
            w.storage_class_id = storage_class.get_untracked();
            w.manufacturer = manufacturer.get_untracked();
        });
        let body = match wizard.with_untracked(WizardState::chemical_request) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::add_chemical(&body).await;
            busy.set(false);
            match result {
                Ok(id) => advance(WizardEvent::ChemicalCreated(id)),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let save_bottle = move |_| {
        wizard.update(|w| w.sub_location_id = sub_location_id.get_untracked());
        let body = match wizard.with_untracked(WizardState::bottle_request) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::add_bottle(&body).await;
            busy.set(false);
            match result {
                Ok(_) => on_close.run(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let step_view = move || match step.get() {
        Step::ProductNumber => view! {
            <label class="dialog__label">
                "Product Number"
                <input
                    class="dialog__input"
                    type="text"
                    list="product-suggestions"
                    prop:value=move || wizard.with(|w| w.product_number.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        suggest_products(value.clone());
                        wizard.update(|w| w.product_number = value);
                    }
                    on:keydown=move |ev| on_enter(&ev, lookup_product)
                />
            </label>
            <datalist id="product-suggestions">
                {move || {
                    suggestions.get().into_iter().map(|p| view! { <option value=p></option> }).collect::<Vec<_>>()
                }}
            </datalist>
            <div class="dialog__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| lookup_product.run(wizard.with_untracked(|w| w.product_number.clone()))
                >
                    "Next"
                </button>
            </div>
        }
        .into_any(),
        Step::ChemicalName => view! {
            <p class="dialog__hint">"No chemical matches that product number. Search by name instead."</p>
            <label class="dialog__label">
                "Chemical Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.chemical_name.clone())
                    on:input=move |ev| wizard.update(|w| w.chemical_name = event_target_value(&ev))
                    on:keydown=move |ev| on_enter(&ev, lookup_name)
                />
            </label>
            <div class="dialog__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| lookup_name.run(wizard.with_untracked(|w| w.chemical_name.clone()))
                >
                    "Next"
                </button>
            </div>
        }
        .into_any(),
        Step::Manufacturer => view! {
            <p class="dialog__hint">
                {move || wizard.with(|w| {
                    if w.chemical_name.is_empty() {
                        format!("Product {}", w.product_number)
                    } else {
                        w.chemical_name.clone()
                    }
                })}
            </p>
            <ManufacturerSelector selected=manufacturer/>
            <label class="dialog__label">
                "Product Number"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.product_number.clone())
                    on:input=move |ev| wizard.update(|w| w.product_number = event_target_value(&ev))
                />
            </label>
            <div class="dialog__actions">
                <button class="btn btn--primary" on:click=choose_manufacturer>"Next"</button>
            </div>
        }
        .into_any(),
        Step::NewChemical => view! {
            <label class="dialog__label">
                "Chemical Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.chemical_name.clone())
                    on:input=move |ev| wizard.update(|w| w.chemical_name = event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Chemical Formula"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.formula.clone())
                    on:input=move |ev| wizard.update(|w| w.formula = event_target_value(&ev))
                />
            </label>
            <StorageClassSelector selected=storage_class/>
            <ManufacturerSelector selected=manufacturer/>
            <label class="dialog__label">
                "Product Number"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.product_number.clone())
                    on:input=move |ev| wizard.update(|w| w.product_number = event_target_value(&ev))
                />
            </label>
            <div class="dialog__actions">
                <button class="btn btn--primary" disabled=move || busy.get() on:click=create_chemical>
                    "Create Chemical"
                </button>
            </div>
        }
        .into_any(),
        Step::BottleDetails => view! {
            <label class="dialog__label">
                "Sticker Number"
                <input
                    class="dialog__input"
                    type="number"
                    prop:value=move || wizard.with(|w| w.sticker.clone())
                    on:input=move |ev| wizard.update(|w| w.sticker = event_target_value(&ev))
                />
            </label>
            <LocationSelector location_id=location_id sub_location_id=sub_location_id/>
            <label class="dialog__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.msds)
                    on:change=move |ev| wizard.update(|w| w.msds = event_target_checked(&ev))
                />
                "MSDS on file"
            </label>
            <div class="dialog__actions">
                <button class="btn btn--primary" disabled=move || busy.get() on:click=save_bottle>
                    "Save"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <Dialog
            title=Signal::derive(move || format!("Add Chemical: {}", step.get().title()))
            on_close=on_close
            class="dialog--wide"
        >
            {move || error.get().map(|e| view! { <p class="dialog__error">{e}</p> })}
            {step_view}
            <div class="dialog__actions dialog__actions--secondary">
                <Show when=move || wizard.with(WizardState::can_go_back)>
                    <button
                        class="btn"
                        on:click=move |_| {
                            error.set(None);
                            wizard.update(|w| {
                                w.back();
                            });
                        }
                    >
                        "Back"
                    </button>
                </Show>
                <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
            </div>
        </Dialog>
    }
}
