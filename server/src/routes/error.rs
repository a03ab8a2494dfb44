//! HTTP error mapping.
//!
//! ERROR HANDLING
//! ==============
//! Service errors convert into [`ApiError`] through `From`, so handlers can
//! use `?` throughout. Business failures keep their `Display` text as the
//! `{"error": ...}` body. Database and upstream failures are logged here and
//! masked as a generic 500 so SQL details never reach the browser.
//!
//! Request bodies go through [`ApiJson`] instead of `axum::Json`, so a
//! malformed or incomplete body is a 400 with the same `{"error": ...}` shape
//! rather than axum's plain-text 422.

use std::collections::BTreeMap;
use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::ErrorBody;
use serde_json::json;

use crate::services::chemical::ChemicalError;
use crate::services::export::ExportError;
use crate::services::inventory::InventoryError;
use crate::services::location::LocationError;
use crate::services::manufacturer::ManufacturerError;
use crate::services::msds::MsdsError;
use crate::services::search::SearchError;
use crate::services::storage_class::StorageClassError;
use crate::services::user::UserError;

pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{1}")]
    Status(StatusCode, String),
    #[error("Validation errors")]
    Validation(BTreeMap<&'static str, String>),
    #[error("{message}")]
    UnknownIds { message: String, ids: Vec<i32> },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("{INTERNAL_MESSAGE}")]
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Status(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Status(StatusCode::NOT_FOUND, message.into())
    }

    /// Log an unexpected failure and mask it.
    pub fn internal(err: impl Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::Internal
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Status(status, _) => *status,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnknownIds { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => {
                (status, Json(json!({ "errors": errors, "message": "Validation errors" }))).into_response()
            }
            Self::UnknownIds { message, ids } => {
                (status, Json(json!({ "error": message, "invalid_ids": ids }))).into_response()
            }
            other => (status, Json(ErrorBody { error: other.to_string() })).into_response(),
        }
    }
}

// =============================================================================
// BODY EXTRACTOR
// =============================================================================

/// JSON request body whose rejection is an [`ApiError`].
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

// =============================================================================
// SERVICE ERROR CONVERSIONS
// =============================================================================

impl From<ChemicalError> for ApiError {
    fn from(err: ChemicalError) -> Self {
        match err {
            ChemicalError::Database(e) => Self::internal(e),
            ChemicalError::NotFound(_) => Self::not_found(err.to_string()),
            ChemicalError::MissingFields | ChemicalError::InvalidReference(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Database(e) => Self::internal(e),
            InventoryError::NotFound(_) | InventoryError::BottleNotFound(_) => Self::not_found(err.to_string()),
            InventoryError::MissingFields
            | InventoryError::DuplicateSticker(_)
            | InventoryError::InvalidReference(_)
            | InventoryError::MissingId
            | InventoryError::InvalidId
            | InventoryError::NotInSubLocation
            | InventoryError::NoBottles
            | InventoryError::InvalidSubLocation => Self::bad_request(err.to_string()),
        }
    }
}

impl From<LocationError> for ApiError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Database(e) => Self::internal(e),
            LocationError::Validation(errors) => Self::Validation(errors),
            LocationError::UnknownIds(ids) => {
                Self::UnknownIds { message: LocationError::UnknownIds(Vec::new()).to_string(), ids }
            }
            LocationError::NotFound(_) | LocationError::SubNotFound(_) => Self::not_found(err.to_string()),
            LocationError::Duplicate | LocationError::SubDuplicate | LocationError::NoIds | LocationError::BadIds => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl From<ManufacturerError> for ApiError {
    fn from(err: ManufacturerError) -> Self {
        match err {
            ManufacturerError::Database(e) => Self::internal(e),
            ManufacturerError::NotFound(_) => Self::not_found(err.to_string()),
            ManufacturerError::NameRequired | ManufacturerError::Duplicate | ManufacturerError::NoIds => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl From<StorageClassError> for ApiError {
    fn from(err: StorageClassError) -> Self {
        match err {
            StorageClassError::Database(e) => Self::internal(e),
            StorageClassError::NotFound(_) => Self::not_found(err.to_string()),
            StorageClassError::NameRequired | StorageClassError::Duplicate | StorageClassError::DeleteUnknown => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl From<MsdsError> for ApiError {
    fn from(err: MsdsError) -> Self {
        match err {
            MsdsError::Database(e) => Self::internal(e),
            MsdsError::MissingUrl => Self::bad_request(err.to_string()),
            MsdsError::ItemNotFound => Self::not_found(err.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Database(e) => Self::internal(e),
            UserError::NotFound(_) => Self::not_found(err.to_string()),
            UserError::InvalidAccess(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        Self::internal(err)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::internal(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
