//! MSDS routes: missing-sheet report, per-bottle flag, and the log URL.

use axum::extract::State;
use axum::response::Json;
use records::{InventoryRef, Message, MissingMsds, MsdsUrl};
use serde_json::{Value, json};

use super::auth::{Editor, FullAccess};
use super::error::{ApiJson, ApiResult};
use crate::services::msds;
use crate::state::AppState;

/// `GET /api/get_missing_msds`
pub async fn get_missing_msds(State(state): State<AppState>, _editor: Editor) -> ApiResult<Json<Vec<MissingMsds>>> {
    Ok(Json(msds::missing_msds(&state.pool).await?))
}

/// `GET /api/get_msds_url`: public so the navbar can render the link before sign-in.
pub async fn get_msds_url(State(state): State<AppState>) -> ApiResult<Json<MsdsUrl>> {
    let url = msds::msds_url(&state.pool).await?;
    Ok(Json(MsdsUrl { url: Some(url) }))
}

/// `POST /api/set_msds_url`
pub async fn set_msds_url(
    State(state): State<AppState>,
    _full: FullAccess,
    ApiJson(body): ApiJson<MsdsUrl>,
) -> ApiResult<Json<Value>> {
    msds::set_msds_url(&state.pool, body.url.as_deref()).await?;
    Ok(Json(json!({ "success": true })))
}

/// `POST /api/add_msds`
pub async fn add_msds(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<InventoryRef>,
) -> ApiResult<Json<Message>> {
    msds::set_msds_flag(&state.pool, body.inventory_id.as_ref(), true).await?;
    Ok(Json(Message::new("MSDS added")))
}

/// `POST /api/clear_msds`
pub async fn clear_msds(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<InventoryRef>,
) -> ApiResult<Json<Message>> {
    msds::set_msds_flag(&state.pool, body.inventory_id.as_ref(), false).await?;
    Ok(Json(Message::new("MSDS cleared")))
}
