//! Bottles without an MSDS on file, plus the MSDS log link editor for
//! full-access users.

use leptos::prelude::*;
use records::MissingMsds;

use crate::components::dialog::Dialog;
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::filter::filter_items;

fn row_label(row: &MissingMsds) -> String {
    format!(
        "{} {} {} {}",
        row.sticker_number,
        row.chemical_name,
        row.manufacturer_name,
        row.product_number.as_deref().unwrap_or_default(),
    )
}

#[component]
pub fn MissingMsdsModal(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rows = RwSignal::new(Vec::<MissingMsds>::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let status = RwSignal::new(None::<Status>);
    let url = RwSignal::new(auth.with_untracked(|a| a.msds_url.clone()));

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_missing_msds().await {
                Ok(found) => rows.set(found),
                Err(_) => status.set(Some(Status::Error("Failed to load missing MSDS list".to_owned()))),
            }
        });
    });

    let add_msds = move |id: i32| {
        leptos::task::spawn_local(async move {
            let result = api::set_msds(id, true).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to update MSDS")));
        });
    };

    let save_url = move |_| {
        let next = url.get_untracked().trim().to_owned();
        leptos::task::spawn_local(async move {
            let result = api::set_msds_url(&next).await;
            if result.is_ok() {
                auth.update(|a| a.msds_url.clone_from(&next));
            }
            let result = result.map(|()| "MSDS URL saved".to_owned());
            status.set(Some(Status::from_result(result, "Failed to save MSDS URL")));
        });
    };

    let table_rows = move || {
        filter_items(&rows.get(), &search.get(), row_label)
            .into_iter()
            .map(|row| {
                let id = row.inventory_id;
                view! {
                    <tr>
                        <td>{row.sticker_number}</td>
                        <td>{row.chemical_name}</td>
                        <td>{row.manufacturer_name}</td>
                        <td>{row.product_number.unwrap_or_default()}</td>
                        <td>
                            <button class="btn" on:click=move |_| add_msds(id)>"Add MSDS"</button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Missing MSDS".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <Show when=move || auth.with(AuthState::is_full)>
                <div class="dialog__form">
                    <label class="dialog__label">
                        "MSDS Log URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || url.get()
                            on:input=move |ev| url.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=save_url>"Save URL"</button>
                    </div>
                </div>
            </Show>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Filter by sticker, chemical, manufacturer or product"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Sticker #"</th>
                        <th>"Chemical"</th>
                        <th>"Manufacturer"</th>
                        <th>"Product #"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{table_rows}</tbody>
            </table>
        </Dialog>
    }
}
