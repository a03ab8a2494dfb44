//! Bottle routes: add, edit, dead/alive, relocation, and audit helpers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{DeleteDead, InventoryPatch, InventoryRef, MarkManyDead, Message, NewBottle, Relocate, ShelfBottle};
use serde::Deserialize;
use serde_json::json;

use super::auth::{AuthUser, Editor};
use super::error::{ApiError, ApiJson, ApiResult};
use crate::services::inventory::{self, Stamp};
use crate::services::today;
use crate::state::AppState;

fn stamp(editor: &Editor) -> Stamp<'_> {
    Stamp { who: &editor.0.user.name, today: today() }
}

/// `POST /api/add_bottle`
pub async fn add_bottle(
    State(state): State<AppState>,
    editor: Editor,
    ApiJson(body): ApiJson<NewBottle>,
) -> ApiResult<Response> {
    let inventory_id = inventory::add_bottle(&state.pool, &body, stamp(&editor)).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Bottle added successfully", "inventory_id": inventory_id })),
    )
        .into_response())
}

/// `PUT /api/update_inventory/{id}`
pub async fn update_inventory(
    State(state): State<AppState>,
    editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<InventoryPatch>,
) -> ApiResult<Json<Message>> {
    inventory::update_inventory(&state.pool, id, &body, stamp(&editor)).await?;
    Ok(Json(Message::new("Inventory updated successfully")))
}

/// `POST /api/chemicals/mark_dead`
pub async fn mark_dead(
    State(state): State<AppState>,
    editor: Editor,
    ApiJson(body): ApiJson<InventoryRef>,
) -> ApiResult<Json<Message>> {
    inventory::set_dead(&state.pool, body.inventory_id.as_ref(), true, stamp(&editor)).await?;
    Ok(Json(Message::new("Chemical marked as dead")))
}

/// `POST /api/chemicals/mark_alive`
pub async fn mark_alive(
    State(state): State<AppState>,
    editor: Editor,
    ApiJson(body): ApiJson<InventoryRef>,
) -> ApiResult<Json<Message>> {
    inventory::set_dead(&state.pool, body.inventory_id.as_ref(), false, stamp(&editor)).await?;
    Ok(Json(Message::new("Chemical marked as alive")))
}

/// `POST /api/chemicals/mark_many_dead`: all-or-nothing retirement of unscanned bottles.
pub async fn mark_many_dead(
    State(state): State<AppState>,
    editor: Editor,
    ApiJson(body): ApiJson<MarkManyDead>,
) -> ApiResult<Json<Message>> {
    let count = inventory::mark_many_dead(&state.pool, body.sub_location_id, &body.inventory_id, stamp(&editor)).await?;
    Ok(Json(Message::new(format!("{count} chemicals marked as dead"))))
}

/// `DELETE /api/chemicals/delete_dead`
pub async fn delete_dead(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<DeleteDead>,
) -> ApiResult<Json<Message>> {
    let count = inventory::delete_dead(&state.pool, &body.dead_bottles).await?;
    Ok(Json(Message::new(format!("{count} dead bottles deleted"))))
}

/// `POST /api/chemicals/update_chemical_location`
pub async fn update_chemical_location(
    State(state): State<AppState>,
    editor: Editor,
    ApiJson(body): ApiJson<Relocate>,
) -> ApiResult<Json<Message>> {
    inventory::relocate(
        &state.pool,
        body.inventory_id.as_ref(),
        body.new_sub_location_id.as_ref(),
        stamp(&editor),
    )
    .await?;
    Ok(Json(Message::new("Location updated")))
}

#[derive(Debug, Deserialize)]
pub struct StickerQuery {
    pub sticker_number: Option<String>,
}

/// `GET /api/chemicals/sticker_lookup?sticker_number=`
pub async fn sticker_lookup(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<StickerQuery>,
) -> ApiResult<Response> {
    let Some(sticker) = params.sticker_number.filter(|s| !s.trim().is_empty()) else {
        return Err(ApiError::bad_request("Missing sticker_number"));
    };
    match inventory::sticker_lookup(&state.pool, &sticker).await? {
        Some(found) => Ok(Json(found).into_response()),
        None => Err(ApiError::not_found("Sticker not found")),
    }
}

#[derive(Debug, Deserialize)]
pub struct ShelfQuery {
    pub sub_location_id: Option<String>,
}

/// `GET /api/chemicals/by_sublocation?sub_location_id=`: live bottles on one shelf.
pub async fn by_sublocation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ShelfQuery>,
) -> ApiResult<Json<Vec<ShelfBottle>>> {
    let Some(raw) = params.sub_location_id.filter(|s| !s.trim().is_empty()) else {
        return Err(ApiError::bad_request("Missing sub_location_id"));
    };
    let id: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid sub_location_id"))?;
    Ok(Json(inventory::by_sublocation(&state.pool, id).await?))
}
