//! API error types with IntoResponse
//!
//! Store failures are not distinguished by kind: every one becomes a
//! bare 500. Only malformed requests get a 400. Neither carries a body;
//! the cause is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be decoded (400)
    BadRequest { message: String },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => {
                tracing::debug!("Rejected request: {}", message);
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
