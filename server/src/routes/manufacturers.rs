//! Manufacturer list routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{IdList, Manufacturer, Message, NameInput};
use serde::Deserialize;
use serde_json::json;

use super::auth::{AuthUser, Editor};
use super::error::{ApiJson, ApiResult};
use crate::services::manufacturer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ManufacturersQuery {
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// `GET /api/manufacturers?active=`: active-only unless `active=false`.
pub async fn list_manufacturers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ManufacturersQuery>,
) -> ApiResult<Json<Vec<Manufacturer>>> {
    Ok(Json(manufacturer::list_manufacturers(&state.pool, params.active).await?))
}

/// `POST /api/add_manufacturer`
pub async fn add_manufacturer(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<NameInput>,
) -> ApiResult<Response> {
    let id = manufacturer::add_manufacturer(&state.pool, &body.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Manufacturer added successfully", "id": id })),
    )
        .into_response())
}

/// `PUT /api/manufacturers/{id}`
pub async fn update_manufacturer(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<NameInput>,
) -> ApiResult<Json<Message>> {
    manufacturer::update_manufacturer(&state.pool, id, &body.name).await?;
    Ok(Json(Message::new("Manufacturer updated successfully")))
}

/// `DELETE /api/delete_manufacturers`
pub async fn delete_manufacturers(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<IdList>,
) -> ApiResult<Json<Message>> {
    manufacturer::delete_manufacturers(&state.pool, &body.ids).await?;
    Ok(Json(Message::new("Manufacturers deleted successfully.")))
}

#[cfg(test)]
#[path = "manufacturers_test.rs"]
mod tests;
