//! Search box, room filter and manufacturer filter.
//!
//! DESIGN
//! ======
//! Typing only records pending text; a 300 ms timer commits it if no newer
//! keystroke arrived (see `FilterState::note_input`). Enter commits at once
//! using the value read from the key event itself.

use leptos::prelude::*;
use records::{Location, Manufacturer};

use crate::net::api;
use crate::state::filters::FilterState;
#[cfg(feature = "hydrate")]
use crate::state::filters::SEARCH_DEBOUNCE_MS;
use crate::state::ui::UiState;
use crate::util::filter::filter_items;

#[component]
pub fn Sidebar() -> impl IntoView {
    let filters = expect_context::<RwSignal<FilterState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let rooms = RwSignal::new(Vec::<Location>::new());
    let manufacturers = RwSignal::new(Vec::<Manufacturer>::new());
    let room_filter = RwSignal::new(String::new());
    let manufacturer_filter = RwSignal::new(String::new());

    // Reload the option lists whenever a dialog closes; it may have added rooms or manufacturers.
    Effect::new(move || {
        ui.with(|u| u.refresh_seq);
        leptos::task::spawn_local(async move {
            if let Ok(rows) = api::fetch_locations().await {
                rooms.set(rows);
            }
            if let Ok(rows) = api::fetch_manufacturers(true).await {
                manufacturers.set(rows);
            }
        });
    });

    let on_input = move |ev: leptos::ev::Event| {
        let ticket = filters.try_update(|f| f.note_input(event_target_value(&ev)));
        #[cfg(feature = "hydrate")]
        {
            if let Some(ticket) = ticket {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                    filters.update(|f| {
                        f.commit_input(ticket);
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            filters.update(|f| f.submit(event_target_value(&ev)));
        }
    };

    let visible_rooms = move || filter_items(&rooms.get(), &room_filter.get(), Location::label);
    let visible_manufacturers = move || filter_items(&manufacturers.get(), &manufacturer_filter.get(), |m| m.name.clone());

    view! {
        <aside class="sidebar">
            <input
                class="sidebar__search"
                type="search"
                placeholder="Search..."
                prop:value=move || filters.with(|f| f.pending_query.clone())
                on:input=on_input
                on:keydown=on_keydown
            />

            <section class="sidebar__section">
                <h3>"Room Location"</h3>
                <input
                    class="sidebar__filter"
                    type="text"
                    placeholder="Filter rooms"
                    prop:value=move || room_filter.get()
                    on:input=move |ev| room_filter.set(event_target_value(&ev))
                />
                <label class="sidebar__option">
                    <input
                        type="radio"
                        name="room"
                        prop:checked=move || filters.with(|f| f.room.is_none())
                        on:change=move |_| filters.update(|f| f.set_room(None))
                    />
                    "Any"
                </label>
                {move || {
                    visible_rooms()
                        .into_iter()
                        .map(|room| {
                            let id = room.location_id;
                            view! {
                                <label class="sidebar__option">
                                    <input
                                        type="radio"
                                        name="room"
                                        prop:checked=move || filters.with(|f| f.room == Some(id))
                                        on:change=move |_| filters.update(|f| f.set_room(Some(id)))
                                    />
                                    {room.label()}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>

            <section class="sidebar__section">
                <h3>"Manufacturers"</h3>
                <input
                    class="sidebar__filter"
                    type="text"
                    placeholder="Filter manufacturers"
                    prop:value=move || manufacturer_filter.get()
                    on:input=move |ev| manufacturer_filter.set(event_target_value(&ev))
                />
                {move || {
                    visible_manufacturers()
                        .into_iter()
                        .map(|m| {
                            let id = m.id;
                            view! {
                                <label class="sidebar__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || filters.with(|f| f.manufacturers.contains(&id))
                                        on:change=move |_| filters.update(|f| f.toggle_manufacturer(id))
                                    />
                                    {m.name}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </aside>
    }
}
