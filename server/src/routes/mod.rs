//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST API, the OIDC sign-in endpoints and Leptos SSR
//! rendering under a single Axum router. API paths keep the names the
//! inventory UI has always called (`/api/get_chemicals`, `/api/add_bottle`,
//! ...), so they are deliberately not normalized into one REST style.

pub mod auth;
pub mod chemicals;
pub mod error;
pub mod export;
pub mod inventory;
pub mod locations;
pub mod manufacturers;
pub mod msds;
pub mod search;
pub mod storage_classes;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// REST API and auth endpoints.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // auth
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/user", get(auth::current_user))
        // users
        .route("/api/get_users", get(users::get_users))
        .route("/api/users/update_access", post(users::update_access))
        .route("/api/users/delete", delete(users::delete_user))
        // chemicals
        .route("/api/get_chemicals", get(chemicals::get_chemicals))
        .route("/api/add_chemical", post(chemicals::add_chemical))
        .route("/api/update_chemical/{id}", put(chemicals::update_chemical))
        .route("/api/delete_chemical/{id}", delete(chemicals::delete_chemical))
        .route("/api/chemicals/product_number_lookup", get(chemicals::product_number_lookup))
        .route("/api/chemicals/chemical_name_lookup", get(chemicals::chemical_name_lookup))
        .route("/api/product-search", get(chemicals::product_search))
        // inventory
        .route("/api/add_bottle", post(inventory::add_bottle))
        .route("/api/update_inventory/{id}", put(inventory::update_inventory))
        .route("/api/chemicals/mark_dead", post(inventory::mark_dead))
        .route("/api/chemicals/mark_alive", post(inventory::mark_alive))
        .route("/api/chemicals/mark_many_dead", post(inventory::mark_many_dead))
        .route("/api/chemicals/delete_dead", delete(inventory::delete_dead))
        .route("/api/chemicals/update_chemical_location", post(inventory::update_chemical_location))
        .route("/api/chemicals/sticker_lookup", get(inventory::sticker_lookup))
        .route("/api/chemicals/by_sublocation", get(inventory::by_sublocation))
        // search + export
        .route("/api/search", get(search::search))
        .route("/api/export_inventory_csv", get(export::export_inventory_csv))
        // msds
        .route("/api/get_missing_msds", get(msds::get_missing_msds))
        .route("/api/get_msds_url", get(msds::get_msds_url))
        .route("/api/set_msds_url", post(msds::set_msds_url))
        .route("/api/add_msds", post(msds::add_msds))
        .route("/api/clear_msds", post(msds::clear_msds))
        // locations
        .route("/api/locations", get(locations::list_locations).post(locations::create_location))
        .route(
            "/api/locations/{id}",
            put(locations::update_location).delete(locations::delete_location),
        )
        .route(
            "/api/sublocations",
            get(locations::list_sublocations)
                .post(locations::create_sublocation)
                .delete(locations::delete_sublocations),
        )
        .route("/api/sublocations/{id}", put(locations::update_sublocation))
        // manufacturers
        .route("/api/manufacturers", get(manufacturers::list_manufacturers))
        .route("/api/add_manufacturer", post(manufacturers::add_manufacturer))
        .route("/api/manufacturers/{id}", put(manufacturers::update_manufacturer))
        .route("/api/delete_manufacturers", delete(manufacturers::delete_manufacturers))
        // storage classes
        .route(
            "/api/storage_classes/",
            get(storage_classes::list_storage_classes).post(storage_classes::create_storage_class),
        )
        .route(
            "/api/storage_classes/{id}",
            put(storage_classes::update_storage_class).delete(storage_classes::delete_storage_class),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR for the inventory UI.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
