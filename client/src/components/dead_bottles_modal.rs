//! Cleanup of dead bottles that have not been touched for over two years.

use leptos::prelude::*;
use time::Date;

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::stale::{DeadRow, stale_dead_bottles, today};

fn display_date(date: Option<Date>) -> String {
    date.and_then(|d| records::format_date(d).ok()).unwrap_or_default()
}

#[component]
pub fn DeadBottlesModal(on_close: Callback<()>) -> impl IntoView {
    let rows = RwSignal::new(Vec::<DeadRow>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let confirming = RwSignal::new(false);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_chemicals(true).await {
                Ok(chemicals) => rows.set(stale_dead_bottles(&chemicals, today())),
                Err(_) => status.set(Some(Status::Error("Failed to load dead bottles".to_owned()))),
            }
            loading.set(false);
        });
    });

    let mark_alive = move |id: i32| {
        leptos::task::spawn_local(async move {
            let result = api::set_dead(id, false).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to mark bottle alive")));
        });
    };

    let delete_all = Callback::new(move |()| {
        confirming.set(false);
        let ids: Vec<i32> = rows.with_untracked(|r| r.iter().map(|row| row.bottle.id).collect());
        leptos::task::spawn_local(async move {
            let result = api::delete_dead(ids).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to delete dead bottles")));
        });
    });

    let table_rows = move || {
        rows.get()
            .into_iter()
            .map(|row| {
                let id = row.bottle.id;
                view! {
                    <tr>
                        <td>{row.bottle.sticker}</td>
                        <td>{row.chemical_name}</td>
                        <td>{row.bottle.location}</td>
                        <td>{row.bottle.sub_location}</td>
                        <td>{display_date(row.bottle.last_updated)}</td>
                        <td>{row.bottle.who_updated}</td>
                        <td>
                            <button class="btn" on:click=move |_| mark_alive(id)>"Mark Alive"</button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Dead Bottles".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <p class="dialog__hint">"Dead bottles last updated more than two years ago."</p>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dialog__hint">"Loading..."</p> }
            >
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="dialog__hint">"No stale dead bottles."</p> }
                >
                    <div class="dialog__toolbar">
                        <button class="btn btn--danger" on:click=move |_| confirming.set(true)>
                            "Delete All Dead Bottles"
                        </button>
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Sticker #"</th>
                                <th>"Chemical"</th>
                                <th>"Location"</th>
                                <th>"Sub-Location"</th>
                                <th>"Last Updated"</th>
                                <th>"Updated By"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{table_rows}</tbody>
                    </table>
                </Show>
            </Show>
            <Show when=move || confirming.get()>
                <Confirm
                    prompt="Permanently delete every bottle listed above?"
                    on_yes=delete_all
                    on_no=Callback::new(move |()| confirming.set(false))
                />
            </Show>
        </Dialog>
    }
}
