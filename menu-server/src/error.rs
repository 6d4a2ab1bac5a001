//! Error type for the HTTP handlers.
//!
//! # Design
//! `NotFound` gets a dedicated variant because absence is the only
//! domain-level failure in this API: a GET for an unknown id maps to 404
//! with an empty body. Everything else a handler can hit is a storage
//! failure, which maps to a bare 500 after being logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menu_core::StoreError;
use thiserror::Error;

/// Errors returned by the menu API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested item does not exist.
    #[error("item not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
