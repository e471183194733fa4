//! Error types for the Books API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::DeploymentMode;

/// Message returned to clients for any unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Detail shown in place of the real error outside development mode
pub const HIDDEN_ERROR_DETAIL: &str = "Internal server error";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// The per-resource miss shared by every `/books/:id` route
    pub fn book_not_found() -> Self {
        AppError::NotFound("Book not found".to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Failure detail, only present on 500 responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw detail of an unexpected failure, attached to the response so the
/// error boundary can log it and decide how much of it to reveal.
#[derive(Debug, Clone)]
pub struct InternalFailure(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            err @ (AppError::MalformedBody(_) | AppError::Internal(_)) => {
                let mut response =
                    internal_error_response(DeploymentMode::Production, HIDDEN_ERROR_DETAIL);
                response
                    .extensions_mut()
                    .insert(InternalFailure(err.to_string()));
                return response;
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            error: None,
        });

        (status, body).into_response()
    }
}

/// Render the 500 envelope, exposing `detail` only in development mode
pub fn internal_error_response(mode: DeploymentMode, detail: &str) -> Response {
    let error = if mode.exposes_error_details() {
        detail.to_string()
    } else {
        HIDDEN_ERROR_DETAIL.to_string()
    };

    let body = Json(ErrorResponse {
        success: false,
        message: INTERNAL_ERROR_MESSAGE.to_string(),
        error: Some(error),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
