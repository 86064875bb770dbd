//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use userhub_core::{ErrorResponse, UserHubError};

/// Application error type for Axum.
///
/// Maps domain errors to HTTP responses through the error's own
/// `status_code()`, so `NotFound` surfaces as a proper 404 rather than a
/// generic server error.
#[derive(Debug)]
pub struct AppError(pub UserHubError);

impl From<UserHubError> for AppError {
    fn from(err: UserHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
