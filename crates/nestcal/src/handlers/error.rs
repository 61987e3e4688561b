//! Transport adapter for the core error taxonomy.
//!
//! The services only raise typed [`ServiceError`]s; this wrapper maps them
//! to HTTP responses at the edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use nestcal_core::calendar::ServiceError;
use nestcal_core::storage::repository_error_to_status_code;

pub struct ApiError(pub ServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            ServiceError::Calendar(_)
            | ServiceError::Event(_)
            | ServiceError::Range(_)
            | ServiceError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(e) => StatusCode::from_u16(repository_error_to_status_code(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ServiceError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
