//! Chemical table driven by the sidebar filters.
//!
//! Every filter change (and every dialog close) issues a new search with a
//! fresh sequence ticket; a response is applied only if its ticket is still
//! the newest, so a slow early search can never overwrite a later one.

use leptos::prelude::*;
use records::SearchHit;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::filters::FilterState;
use crate::state::ui::{Modal, UiState};

#[component]
pub fn MainContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let filters = expect_context::<RwSignal<FilterState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let hits = RwSignal::new(Vec::<SearchHit>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let params = Memo::new(move |_| filters.with(FilterState::params));

    Effect::new(move || {
        let request = params.get();
        ui.with(|u| u.refresh_seq);
        let Some(ticket) = filters.try_update_untracked(FilterState::begin_search) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::search(&request).await;
            if !filters.with_untracked(|f| f.is_current(ticket)) {
                return;
            }
            loading.set(false);
            match result {
                Ok(rows) => {
                    hits.set(rows);
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let has_query = move || params.with(|p| !p.query.trim().is_empty());

    view! {
        <main class="main-content">
            <div class="main-content__toolbar">
                <a class="btn" href=api::EXPORT_CSV_PATH rel="external" download="inventory_report.csv">
                    "Download CSV"
                </a>
                <Show when=move || has_query() && !params.with(|p| p.synonyms)>
                    <button class="btn" on:click=move |_| filters.update(FilterState::expand_search)>
                        "Expand Search"
                    </button>
                </Show>
            </div>
            {move || error.get().map(|e| view! { <p class="main-content__error">{e}</p> })}
            <Show
                when=move || !(loading.get() && hits.with(Vec::is_empty))
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Quantity"</th>
                            <th>"Chemical"</th>
                            <th>"Chemical Formula"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            hits.get()
                                .into_iter()
                                .map(|hit| {
                                    let id = hit.id;
                                    view! {
                                        <tr>
                                            <td>{hit.quantity}</td>
                                            <td>
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| ui.update(|u| u.open(Modal::Chemical(id)))
                                                >
                                                    {hit.chemical_name}
                                                </button>
                                            </td>
                                            <td>{hit.formula.unwrap_or_default()}</td>
                                            <td>
                                                <Show when=move || auth.get().can_edit()>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| ui.update(|u| u.open(Modal::ChemicalEdit(id)))
                                                    >
                                                        "Edit"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </main>
    }
}
