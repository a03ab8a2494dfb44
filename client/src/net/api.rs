//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since every call is made
//! from the browser after hydration.
//!
//! All requests funnel through four transport helpers (`get_json`,
//! `get_optional`, `send_json`, `send_empty`); the public functions only
//! name the endpoint and the payload type.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics. The error string is the
//! server's `error` (or `message`) field when the body carries one, otherwise
//! a generic `request failed: <status>`, ready to show in a status banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{
    AccessUpdate, Chemical, ChemicalLookup, ChemicalPatch, CurrentUser, DeleteDead, IdList, InventoryPatch,
    InventoryRef, Location, LocationInput, Manufacturer, MarkManyDead, Message, MissingMsds, MsdsUrl, NameInput,
    NewBottle, NewChemical, ProductLookup, Relocate, SearchHit, ShelfBottle, StickerLookup, StorageClass,
    SubLocationDetail, SubLocationIds, SubLocationInput, UserRef, UserSummary,
};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `(name, value)` pairs appended as a query string.
pub type QueryPairs = Vec<(&'static str, String)>;

pub const LOGIN_PATH: &str = "/auth/login";
pub const EXPORT_CSV_PATH: &str = "/api/export_inventory_csv";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

// =============================================================================
// ENDPOINT + QUERY BUILDERS
// =============================================================================

/// Filters sent with `GET /api/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub synonyms: bool,
    pub room: Option<i32>,
    pub manufacturers: Vec<i32>,
}

impl SearchParams {
    /// Query pairs; unset filters are omitted rather than sent empty.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("query", self.query.trim().to_owned())];
        if self.synonyms {
            pairs.push(("synonyms", "true".to_owned()));
        }
        if let Some(room) = self.room {
            pairs.push(("room", room.to_string()));
        }
        if !self.manufacturers.is_empty() {
            let ids: Vec<String> = self.manufacturers.iter().map(ToString::to_string).collect();
            pairs.push(("manufacturers", ids.join(",")));
        }
        pairs
    }
}

fn chemicals_query(dead: bool) -> QueryPairs {
    vec![("dead", dead.to_string())]
}

fn manufacturers_query(active_only: bool) -> QueryPairs {
    vec![("active", active_only.to_string())]
}

fn text_query(name: &'static str, value: &str) -> QueryPairs {
    vec![(name, value.to_owned())]
}

fn update_chemical_endpoint(id: i32) -> String {
    format!("/api/update_chemical/{id}")
}

fn delete_chemical_endpoint(id: i32) -> String {
    format!("/api/delete_chemical/{id}")
}

fn update_inventory_endpoint(id: i32) -> String {
    format!("/api/update_inventory/{id}")
}

fn location_endpoint(id: i32) -> String {
    format!("/api/locations/{id}")
}

fn sublocation_endpoint(id: i32) -> String {
    format!("/api/sublocations/{id}")
}

fn manufacturer_endpoint(id: i32) -> String {
    format!("/api/manufacturers/{id}")
}

fn storage_class_endpoint(id: i32) -> String {
    format!("/api/storage_classes/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pick the user-facing message out of a failed response body.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| b.get("error").or_else(|| b.get("message")))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| request_failed_message(status), str::to_owned)
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
fn builder(method: Method, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Post => Request::post(path),
        Method::Put => Request::put(path),
        Method::Delete => Request::delete(path),
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_get(path: &str, query: &[(&'static str, String)]) -> Result<gloo_net::http::Response, String> {
    let mut request = gloo_net::http::Request::get(path);
    if !query.is_empty() {
        request = request.query(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    request.send().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if resp.ok() {
        return resp.json::<T>().await.map_err(|e| e.to_string());
    }
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    let message = failure_message(status, body.as_ref());
    log::warn!("{} failed ({status}): {message}", resp.url());
    Err(message)
}

async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        decode(fetch_get(path, query).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Like [`get_json`], but a 404 is a successful "nothing found".
async fn get_optional<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> Result<Option<T>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = fetch_get(path, query).await?;
        if resp.status() == 404 {
            return Ok(None);
        }
        decode(resp).await.map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(NOT_AVAILABLE.to_owned())
    }
}

async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = builder(method, path)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(NOT_AVAILABLE.to_owned())
    }
}

async fn send_empty<T: DeserializeOwned>(method: Method, path: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = builder(method, path).send().await.map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path);
        Err(NOT_AVAILABLE.to_owned())
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Fetch the signed-in user from `GET /api/user`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    get_json("/api/user", &[]).await.ok()
}

/// Log out via `POST /api/auth/logout` (204, no body).
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout failed: {e}");
        }
    }
}

/// Stored MSDS log URL; empty when unset or unreachable.
pub async fn fetch_msds_url() -> String {
    get_json::<MsdsUrl>("/api/get_msds_url", &[])
        .await
        .ok()
        .and_then(|u| u.url)
        .unwrap_or_default()
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn set_msds_url(url: &str) -> Result<(), String> {
    let body = MsdsUrl { url: Some(url.to_owned()) };
    send_json::<_, serde_json::Value>(Method::Post, "/api/set_msds_url", &body)
        .await
        .map(|_| ())
}

// =============================================================================
// SEARCH + CHEMICALS
// =============================================================================

/// # Errors
///
/// Returns the server's message on failure.
pub async fn search(params: &SearchParams) -> Result<Vec<SearchHit>, String> {
    get_json("/api/search", &params.query_pairs()).await
}

/// Every chemical with its live bottles, or with its dead bottles when `dead`.
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_chemicals(dead: bool) -> Result<Vec<Chemical>, String> {
    get_json("/api/get_chemicals", &chemicals_query(dead)).await
}

/// One chemical with its bottles.
///
/// # Errors
///
/// Returns the server's message on failure, or `"Chemical not found"`.
pub async fn fetch_chemical(id: i32, dead: bool) -> Result<Chemical, String> {
    fetch_chemicals(dead)
        .await?
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| "Chemical not found".to_owned())
}

#[derive(Deserialize)]
struct ChemicalCreated {
    chemical_id: i32,
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn add_chemical(body: &NewChemical) -> Result<i32, String> {
    send_json::<_, ChemicalCreated>(Method::Post, "/api/add_chemical", body)
        .await
        .map(|c| c.chemical_id)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_chemical(id: i32, body: &ChemicalPatch) -> Result<String, String> {
    send_json::<_, Message>(Method::Put, &update_chemical_endpoint(id), body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_chemical(id: i32) -> Result<String, String> {
    send_empty::<Message>(Method::Delete, &delete_chemical_endpoint(id))
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure. A miss is `Ok(None)`.
pub async fn product_number_lookup(product_number: &str) -> Result<Option<ProductLookup>, String> {
    get_optional(
        "/api/chemicals/product_number_lookup",
        &text_query("product_number", product_number),
    )
    .await
}

/// # Errors
///
/// Returns the server's message on failure. A miss is `Ok(None)`.
pub async fn chemical_name_lookup(name: &str) -> Result<Option<ChemicalLookup>, String> {
    get_optional("/api/chemicals/chemical_name_lookup", &text_query("chemical_name", name)).await
}

/// Product numbers containing `query`, for the wizard's autocomplete.
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn product_search(query: &str) -> Result<Vec<String>, String> {
    get_json("/api/product-search", &text_query("query", query)).await
}

// =============================================================================
// INVENTORY
// =============================================================================

#[derive(Deserialize)]
struct BottleCreated {
    inventory_id: i32,
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn add_bottle(body: &NewBottle) -> Result<i32, String> {
    send_json::<_, BottleCreated>(Method::Post, "/api/add_bottle", body)
        .await
        .map(|b| b.inventory_id)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_inventory(id: i32, body: &InventoryPatch) -> Result<String, String> {
    send_json::<_, Message>(Method::Put, &update_inventory_endpoint(id), body)
        .await
        .map(|m| m.message)
}

/// Mark a bottle dead (`true`) or alive (`false`).
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn set_dead(inventory_id: i32, dead: bool) -> Result<String, String> {
    let path = if dead { "/api/chemicals/mark_dead" } else { "/api/chemicals/mark_alive" };
    send_json::<_, Message>(Method::Post, path, &InventoryRef::new(inventory_id))
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure; nothing changes in that case.
pub async fn mark_many_dead(sub_location_id: i32, inventory_id: Vec<i32>) -> Result<String, String> {
    let body = MarkManyDead { sub_location_id, inventory_id };
    send_json::<_, Message>(Method::Post, "/api/chemicals/mark_many_dead", &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_dead(dead_bottles: Vec<i32>) -> Result<String, String> {
    send_json::<_, Message>(Method::Delete, "/api/chemicals/delete_dead", &DeleteDead { dead_bottles })
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn relocate(inventory_id: i32, new_sub_location_id: i32) -> Result<String, String> {
    let body = Relocate {
        inventory_id: Some(inventory_id.into()),
        new_sub_location_id: Some(new_sub_location_id.into()),
    };
    send_json::<_, Message>(Method::Post, "/api/chemicals/update_chemical_location", &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure. An unknown sticker is `Ok(None)`.
pub async fn sticker_lookup(sticker: &str) -> Result<Option<StickerLookup>, String> {
    get_optional("/api/chemicals/sticker_lookup", &text_query("sticker_number", sticker)).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn bottles_in_sublocation(sub_location_id: i32) -> Result<Vec<ShelfBottle>, String> {
    get_json(
        "/api/chemicals/by_sublocation",
        &text_query("sub_location_id", &sub_location_id.to_string()),
    )
    .await
}

// =============================================================================
// MSDS
// =============================================================================

/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_missing_msds() -> Result<Vec<MissingMsds>, String> {
    get_json("/api/get_missing_msds", &[]).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn set_msds(inventory_id: i32, present: bool) -> Result<String, String> {
    let path = if present { "/api/add_msds" } else { "/api/clear_msds" };
    send_json::<_, Message>(Method::Post, path, &InventoryRef::new(inventory_id))
        .await
        .map(|m| m.message)
}

// =============================================================================
// LOCATIONS
// =============================================================================

/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    get_json("/api/locations", &[]).await
}

/// # Errors
///
/// Returns the server's message (or its validation summary) on failure.
pub async fn create_location(body: &LocationInput) -> Result<String, String> {
    send_json::<_, Message>(Method::Post, "/api/locations", body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_location(id: i32, body: &LocationInput) -> Result<String, String> {
    send_json::<_, Message>(Method::Put, &location_endpoint(id), body)
        .await
        .map(|m| m.message)
}

/// Delete a location with its sub-locations and bottles.
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_location(id: i32) -> Result<String, String> {
    send_empty::<Message>(Method::Delete, &location_endpoint(id))
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_sublocations() -> Result<Vec<SubLocationDetail>, String> {
    get_json("/api/sublocations", &[]).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn create_sublocation(name: &str, location_id: i32) -> Result<String, String> {
    let body = SubLocationInput { name: name.to_owned(), location_id: Some(location_id) };
    send_json::<_, Message>(Method::Post, "/api/sublocations", &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_sublocation(id: i32, name: &str, location_id: i32) -> Result<String, String> {
    let body = SubLocationInput { name: name.to_owned(), location_id: Some(location_id) };
    send_json::<_, Message>(Method::Put, &sublocation_endpoint(id), &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_sublocations(ids: &[i32]) -> Result<String, String> {
    let body = SubLocationIds { sublocation_ids: Some(ids.into()) };
    send_json::<_, Message>(Method::Delete, "/api/sublocations", &body)
        .await
        .map(|m| m.message)
}

// =============================================================================
// MANUFACTURERS
// =============================================================================

/// Manufacturers with live bottles, or all of them when `active_only` is false.
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_manufacturers(active_only: bool) -> Result<Vec<Manufacturer>, String> {
    get_json("/api/manufacturers", &manufacturers_query(active_only)).await
}

#[derive(Deserialize)]
struct ManufacturerCreated {
    id: i32,
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn add_manufacturer(name: &str) -> Result<Manufacturer, String> {
    let body = NameInput { name: name.to_owned() };
    send_json::<_, ManufacturerCreated>(Method::Post, "/api/add_manufacturer", &body)
        .await
        .map(|c| Manufacturer { id: c.id, name: name.trim().to_owned() })
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_manufacturer(id: i32, name: &str) -> Result<String, String> {
    let body = NameInput { name: name.to_owned() };
    send_json::<_, Message>(Method::Put, &manufacturer_endpoint(id), &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_manufacturers(ids: Vec<i32>) -> Result<String, String> {
    send_json::<_, Message>(Method::Delete, "/api/delete_manufacturers", &IdList { ids })
        .await
        .map(|m| m.message)
}

// =============================================================================
// STORAGE CLASSES
// =============================================================================

/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_storage_classes() -> Result<Vec<StorageClass>, String> {
    get_json("/api/storage_classes/", &[]).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn create_storage_class(name: &str) -> Result<StorageClass, String> {
    send_json(Method::Post, "/api/storage_classes/", &NameInput { name: name.to_owned() }).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_storage_class(id: i32, name: &str) -> Result<StorageClass, String> {
    send_json(Method::Put, &storage_class_endpoint(id), &NameInput { name: name.to_owned() }).await
}

/// Delete a storage class; its chemicals move to `Unknown`.
///
/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_storage_class(id: i32) -> Result<String, String> {
    send_empty::<Message>(Method::Delete, &storage_class_endpoint(id))
        .await
        .map(|m| m.message)
}

// =============================================================================
// USERS
// =============================================================================

/// # Errors
///
/// Returns the server's message on failure.
pub async fn fetch_users() -> Result<Vec<UserSummary>, String> {
    get_json("/api/get_users", &[]).await
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn update_access(user_id: i32, access: records::AccessLevel) -> Result<String, String> {
    let body = AccessUpdate { user_id, access: access.as_str().to_owned() };
    send_json::<_, Message>(Method::Post, "/api/users/update_access", &body)
        .await
        .map(|m| m.message)
}

/// # Errors
///
/// Returns the server's message on failure.
pub async fn delete_user(user_id: i32) -> Result<String, String> {
    send_json::<_, Message>(Method::Delete, "/api/users/delete", &UserRef { user_id })
        .await
        .map(|m| m.message)
}
