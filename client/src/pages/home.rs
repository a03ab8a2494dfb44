//! Inventory home screen: navbar, filter sidebar, chemical table, and the
//! one dialog that may be open on top of them.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page asks the server who is signed in and where the MSDS log
//! lives. Dialogs are chosen by `UiState::modal` and rendered only when the
//! current access level allows them, so a stale `modal` value left over from
//! a logout never shows an editor dialog to a visitor.

use leptos::prelude::*;

use crate::components::add_chemical_modal::AddChemicalModal;
use crate::components::chemical_edit_modal::ChemicalEditModal;
use crate::components::chemical_modal::ChemicalModal;
use crate::components::dead_bottles_modal::DeadBottlesModal;
use crate::components::inventory_audit_modal::InventoryAuditModal;
use crate::components::location_modal::LocationModal;
use crate::components::main_content::MainContent;
use crate::components::manage_users_modal::ManageUsersModal;
use crate::components::manufacturer_modal::ManufacturerModal;
use crate::components::missing_msds_modal::MissingMsdsModal;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::components::storage_class_modal::StorageClassModal;
use crate::components::sub_location_modal::SubLocationModal;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::{Modal, UiState};
use crate::util::access::may_open;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let user = api::fetch_current_user().await;
            let msds_url = api::fetch_msds_url().await;
            auth.update(|a| {
                a.user = user;
                a.msds_url = msds_url;
                a.loading = false;
            });
        });
    });

    let on_close = Callback::new(move |()| ui.update(UiState::close));

    let modal = Memo::new(move |_| {
        let access = auth.with(AuthState::access);
        ui.with(|u| u.modal).filter(|m| may_open(*m, access))
    });

    let dialog = move || {
        modal.get().map(|m| match m {
            Modal::AddChemical => view! { <AddChemicalModal on_close=on_close/> }.into_any(),
            Modal::Chemical(id) => view! { <ChemicalModal chemical_id=id on_close=on_close/> }.into_any(),
            Modal::ChemicalEdit(id) => view! { <ChemicalEditModal chemical_id=id on_close=on_close/> }.into_any(),
            Modal::InventoryAudit => view! { <InventoryAuditModal on_close=on_close/> }.into_any(),
            Modal::DeadBottles => view! { <DeadBottlesModal on_close=on_close/> }.into_any(),
            Modal::MissingMsds => view! { <MissingMsdsModal on_close=on_close/> }.into_any(),
            Modal::Manufacturers => view! { <ManufacturerModal on_close=on_close/> }.into_any(),
            Modal::Locations => view! { <LocationModal on_close=on_close/> }.into_any(),
            Modal::SubLocations => view! { <SubLocationModal on_close=on_close/> }.into_any(),
            Modal::StorageClasses => view! { <StorageClassModal on_close=on_close/> }.into_any(),
            Modal::ManageUsers => view! { <ManageUsersModal on_close=on_close/> }.into_any(),
        })
    };

    view! {
        <div class="app">
            <Navbar/>
            <div class="app__body">
                <Sidebar/>
                <MainContent/>
            </div>
            {dialog}
        </div>
    }
}
