//! Chemical catalogue routes and the add-chemical wizard lookups.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{Chemical, ChemicalPatch, Message, NewChemical};
use serde::Deserialize;
use serde_json::json;

use super::auth::{AuthUser, Editor};
use super::error::{ApiError, ApiJson, ApiResult};
use crate::services::chemical;
use crate::state::AppState;

/// Lookup miss: a bare `{}` with 404, which the wizard treats as "not found, go on".
pub(crate) fn empty_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct ChemicalsQuery {
    #[serde(default)]
    pub dead: bool,
}

/// `GET /api/get_chemicals?dead=`: every chemical with its live (or dead) bottles.
pub async fn get_chemicals(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ChemicalsQuery>,
) -> ApiResult<Json<Vec<Chemical>>> {
    Ok(Json(chemical::list_chemicals(&state.pool, params.dead).await?))
}

/// `POST /api/add_chemical`: create a chemical (and its manufacturer link).
pub async fn add_chemical(
    State(state): State<AppState>,
    Editor(auth): Editor,
    ApiJson(body): ApiJson<NewChemical>,
) -> ApiResult<Response> {
    let chemical_id = chemical::add_chemical(&state.pool, &body).await?;
    tracing::info!(chemical_id, by = %auth.user.name, "chemical created via api");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Chemical added successfully", "chemical_id": chemical_id })),
    )
        .into_response())
}

/// `PUT /api/update_chemical/{id}`
pub async fn update_chemical(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
    ApiJson(body): ApiJson<ChemicalPatch>,
) -> ApiResult<Json<Message>> {
    chemical::update_chemical(&state.pool, id, &body).await?;
    Ok(Json(Message::new("Chemical updated successfully")))
}

/// `DELETE /api/delete_chemical/{id}`
pub async fn delete_chemical(
    State(state): State<AppState>,
    _editor: Editor,
    Path(id): Path<i32>,
) -> ApiResult<Json<Message>> {
    chemical::delete_chemical(&state.pool, id).await?;
    Ok(Json(Message::new("Chemical deleted successfully")))
}

// =============================================================================
// LOOKUPS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ProductNumberQuery {
    pub product_number: Option<String>,
}

/// `GET /api/chemicals/product_number_lookup?product_number=`
pub async fn product_number_lookup(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ProductNumberQuery>,
) -> ApiResult<Response> {
    // Absent and empty keys are plain misses; the match itself is untrimmed.
    let Some(product_number) = params.product_number.filter(|p| !p.is_empty()) else {
        return Ok(empty_not_found());
    };
    Ok(match chemical::product_number_lookup(&state.pool, &product_number).await? {
        Some(found) => Json(found).into_response(),
        None => empty_not_found(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ChemicalNameQuery {
    pub chemical_name: Option<String>,
}

/// `GET /api/chemicals/chemical_name_lookup?chemical_name=`
pub async fn chemical_name_lookup(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ChemicalNameQuery>,
) -> ApiResult<Response> {
    let Some(name) = params.chemical_name.filter(|n| !n.trim().is_empty()) else {
        return Err(ApiError::bad_request("Missing chemical_name"));
    };
    Ok(match chemical::chemical_name_lookup(&state.pool, &name).await? {
        Some(found) => Json(found).into_response(),
        None => empty_not_found(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ProductSearchQuery {
    #[serde(default)]
    pub query: String,
}

/// `GET /api/product-search?query=`: product-number autocomplete.
pub async fn product_search(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ProductSearchQuery>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(chemical::product_search(&state.pool, &params.query).await?))
}

#[cfg(test)]
#[path = "chemicals_test.rs"]
mod tests;
