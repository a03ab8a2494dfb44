//! Top navigation bar with access-gated links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors see only the brand and their sign-in state. Editors get the
//! inventory links and the "Manage Database" menu; full-access users also get
//! "Manage Users". Links open dialogs through `UiState`.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::access::{DATABASE_MENU, NavItem, nav_items};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = RwSignal::new(false);

    let open_msds_log = move || {
        #[cfg(feature = "hydrate")]
        {
            let url = auth.get_untracked().msds_url;
            if url.is_empty() {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            api::logout().await;
            auth.update(|a| a.user = None);
        });
    };

    let link = move |item: NavItem| match item {
        NavItem::ManageDatabase => view! {
            <div class="navbar__menu">
                <button class="btn navbar__link" on:click=move |_| menu_open.update(|o| *o = !*o)>
                    {item.label()}
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="navbar__dropdown">
                        {DATABASE_MENU
                            .into_iter()
                            .map(|(label, modal)| {
                                view! {
                                    <li>
                                        <button
                                            class="btn navbar__dropdown-item"
                                            on:click=move |_| {
                                                menu_open.set(false);
                                                ui.update(|u| u.open(modal));
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Show>
            </div>
        }
        .into_any(),
        NavItem::MsdsLog => view! {
            <button
                class="btn navbar__link"
                disabled=move || auth.get().msds_url.is_empty()
                on:click=move |_| open_msds_log()
            >
                {item.label()}
            </button>
        }
        .into_any(),
        _ => view! {
            <button
                class="btn navbar__link"
                on:click=move |_| {
                    if let Some(modal) = item.modal() {
                        ui.update(|u| u.open(modal));
                    }
                }
            >
                {item.label()}
            </button>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Chemical Inventory"</a>
            <div class="navbar__links">
                {move || nav_items(auth.get().access()).into_iter().map(link).collect::<Vec<_>>()}
            </div>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <a class="btn navbar__login" href=api::LOGIN_PATH rel="external">
                            "Sign in"
                        </a>
                    }
                }
            >
                <span class="navbar__self">
                    {move || auth.get().display_name()}
                    " ("
                    <span class="navbar__self-access">
                        {move || auth.get().access().map(|a| a.as_str()).unwrap_or_default()}
                    </span>
                    ")"
                </span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
