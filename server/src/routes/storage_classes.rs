//! Storage class routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{Message, NameInput, StorageClass};

use super::auth::{AuthUser, Editor};
use super::error::{ApiJson, ApiResult};
use crate::services::storage_class;
use crate::state::AppState;

/// `GET /api/storage_classes/`
pub async fn list_storage_classes(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<Vec<StorageClass>>> {
    Ok(Json(storage_class::list_storage_classes(&state.pool).await?))
}

/// `POST /api/storage_classes/`
pub async fn create_storage_class(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<NameInput>,
) -> ApiResult<(StatusCode, Json<StorageClass>)> {
    let created = storage_class::create_storage_class(&state.pool, &body.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/storage_classes/{id}`
pub async fn update_storage_class(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<NameInput>,
) -> ApiResult<Json<StorageClass>> {
    Ok(Json(storage_class::update_storage_class(&state.pool, id, &body.name).await?))
}

/// `DELETE /api/storage_classes/{id}`: chemicals move to `Unknown`.
pub async fn delete_storage_class(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
) -> ApiResult<Json<Message>> {
    storage_class::delete_storage_class(&state.pool, id).await?;
    Ok(Json(Message::new("Storage class deleted successfully")))
}
