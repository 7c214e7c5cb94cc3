use crate::album_store::ValidationError;
use crate::search::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by every album handler.
///
/// Validation problems are reported back to the caller as they are, storage
/// failures are logged and answered with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("{operation} failed: {source:#}")]
    Storage {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Album {0} not found")]
    NotFound(i64),
}

impl ApiError {
    /// Wraps a store error with the operation it came from, for `map_err`.
    pub fn storage(operation: &'static str) -> impl FnOnce(anyhow::Error) -> ApiError {
        move |source| ApiError::Storage { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Search(_) | ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            warn!("Request rejected: {}", self);
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
