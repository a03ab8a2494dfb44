//! User administration routes (full access only).

use axum::extract::State;
use axum::response::Json;
use records::{AccessUpdate, Message, UserRef, UserSummary};

use super::auth::FullAccess;
use super::error::{ApiJson, ApiResult};
use crate::services::user;
use crate::state::AppState;

/// `GET /api/get_users`
pub async fn get_users(State(state): State<AppState>, _full: FullAccess) -> ApiResult<Json<Vec<UserSummary>>> {
    Ok(Json(user::list_users(&state.pool).await?))
}

/// `POST /api/users/update_access`
pub async fn update_access(
    State(state): State<AppState>,
    FullAccess(auth): FullAccess,
    ApiJson(body): ApiJson<AccessUpdate>,
) -> ApiResult<Json<Message>> {
    user::update_access(&state.pool, body.user_id, &body.access).await?;
    tracing::info!(user_id = body.user_id, access = %body.access, by = auth.user.id, "access updated");
    Ok(Json(Message::new("Access updated successfully")))
}

/// `DELETE /api/users/delete`
pub async fn delete_user(
    State(state): State<AppState>,
    FullAccess(auth): FullAccess,
    ApiJson(body): ApiJson<UserRef>,
) -> ApiResult<Json<Message>> {
    user::delete_user(&state.pool, body.user_id).await?;
    tracing::info!(user_id = body.user_id, by = auth.user.id, "user deleted");
    Ok(Json(Message::new("User deleted successfully")))
}
