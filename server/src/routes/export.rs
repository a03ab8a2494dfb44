//! CSV download of the whole inventory.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::auth::AuthUser;
use super::error::ApiResult;
use crate::services::export;
use crate::state::AppState;

pub(crate) fn content_disposition() -> String {
    format!("attachment; filename={}", export::FILENAME)
}

/// `GET /api/export_inventory_csv`
pub async fn export_inventory_csv(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Response> {
    let csv = export::export_inventory(&state.pool).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()), (header::CONTENT_DISPOSITION, content_disposition())],
        csv,
    )
        .into_response())
}
