//! Location + sub-location dropdown pair.

#[cfg(test)]
#[path = "location_selector_test.rs"]
mod location_selector_test;

use leptos::prelude::*;
use records::Location;

use crate::net::api;
use crate::util::form::parse_id;

/// Resolve a consistent `(location, sub_location)` pair.
///
/// The location is the requested one, else the one holding `sub_id`, else
/// the first. The sub-location is kept only if it belongs to that location;
/// otherwise the location's first sub-location is chosen.
pub fn reconcile(locations: &[Location], location_id: Option<i32>, sub_id: Option<i32>) -> (Option<i32>, Option<i32>) {
    let holds = |l: &&Location, id: i32| l.sub_locations.iter().any(|s| s.sub_location_id == id);
    let location = location_id
        .and_then(|id| locations.iter().find(|l| l.location_id == id))
        .or_else(|| sub_id.and_then(|id| locations.iter().find(|l| holds(l, id))))
        .or_else(|| locations.first());
    let Some(location) = location else {
        return (None, None);
    };
    let sub = sub_id
        .filter(|id| holds(&location, *id))
        .or_else(|| location.sub_locations.first().map(|s| s.sub_location_id));
    (Some(location.location_id), sub)
}

#[component]
pub fn LocationSelector(location_id: RwSignal<Option<i32>>, sub_location_id: RwSignal<Option<i32>>) -> impl IntoView {
    let locations = RwSignal::new(Vec::<Location>::new());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(rows) = api::fetch_locations().await {
                let (loc, sub) = reconcile(&rows, location_id.get_untracked(), sub_location_id.get_untracked());
                locations.set(rows);
                location_id.set(loc);
                sub_location_id.set(sub);
            }
        });
    });

    let on_location = move |ev: leptos::ev::Event| {
        let requested = parse_id(&event_target_value(&ev));
        let (loc, sub) = reconcile(&locations.get_untracked(), requested, None);
        location_id.set(loc);
        sub_location_id.set(sub);
    };

    let sub_options = move || {
        let current = location_id.get();
        locations
            .get()
            .into_iter()
            .find(|l| Some(l.location_id) == current)
            .map(|l| l.sub_locations)
            .unwrap_or_default()
    };

    view! {
        <label class="dialog__label">
            "Location"
            <select
                class="dialog__input"
                prop:value=move || location_id.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=on_location
            >
                {move || {
                    locations
                        .get()
                        .into_iter()
                        .map(|l| {
                            let label = l.label();
                            view! { <option value=l.location_id.to_string()>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
        <label class="dialog__label">
            "Sub-Location"
            <select
                class="dialog__input"
                prop:value=move || sub_location_id.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| sub_location_id.set(parse_id(&event_target_value(&ev)))
            >
                {move || {
                    sub_options()
                        .into_iter()
                        .map(|s| view! { <option value=s.sub_location_id.to_string()>{s.sub_location_name}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
