//! Location and sub-location management routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{Location, LocationInput, Message, SubLocationDetail, SubLocationIds, SubLocationInput};
use serde::Deserialize;
use serde_json::json;

use super::auth::{AuthUser, Editor};
use super::error::{ApiJson, ApiResult};
use crate::services::location;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub query: Option<String>,
}

/// `GET /api/locations?query=`
pub async fn list_locations(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Vec<Location>>> {
    Ok(Json(location::list_locations(&state.pool, params.query.as_deref()).await?))
}

/// `POST /api/locations`
pub async fn create_location(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<LocationInput>,
) -> ApiResult<Response> {
    let id = location::create_location(&state.pool, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Location created successfully", "location_id": id })),
    )
        .into_response())
}

/// `PUT /api/locations/{id}`
pub async fn update_location(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<LocationInput>,
) -> ApiResult<Json<Message>> {
    location::update_location(&state.pool, id, &body).await?;
    Ok(Json(Message::new("Location updated successfully")))
}

/// `DELETE /api/locations/{id}`
pub async fn delete_location(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
) -> ApiResult<Json<Message>> {
    location::delete_location(&state.pool, id).await?;
    Ok(Json(Message::new("Location and associated data deleted successfully")))
}

// =============================================================================
// SUB-LOCATIONS
// =============================================================================

/// `GET /api/sublocations?query=`
pub async fn list_sublocations(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Vec<SubLocationDetail>>> {
    Ok(Json(location::list_sublocations(&state.pool, params.query.as_deref()).await?))
}

/// `POST /api/sublocations`
pub async fn create_sublocation(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<SubLocationInput>,
) -> ApiResult<Response> {
    let id = location::create_sublocation(&state.pool, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Sublocation created successfully", "sub_location_id": id })),
    )
        .into_response())
}

/// `PUT /api/sublocations/{id}`
pub async fn update_sublocation(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<SubLocationInput>,
) -> ApiResult<Json<Message>> {
    location::update_sublocation(&state.pool, id, &body).await?;
    Ok(Json(Message::new("Sublocation updated successfully")))
}

/// `DELETE /api/sublocations`: bulk delete; unknown ids abort the batch.
pub async fn delete_sublocations(
    State(state): State<AppState>,
    _editor: Editor,
    ApiJson(body): ApiJson<SubLocationIds>,
) -> ApiResult<Json<Message>> {
    location::delete_sublocations(&state.pool, body.sublocation_ids.as_ref()).await?;
    Ok(Json(Message::new("Sublocations deleted successfully.")))
}
