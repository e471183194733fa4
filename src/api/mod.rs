//! API handlers for the Books REST endpoints

pub mod books;
pub mod openapi;
pub mod root;

use std::any::Any;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::DeploymentMode,
    error::{internal_error_response, AppError, InternalFailure},
    AppState,
};

/// JSON body extractor with lenient handling of absent bodies.
///
/// A request without a JSON content type, an empty body or a top-level array
/// yields `T::default()`, so no field is ever read by position. Any other
/// non-object value, or a body that does not parse, is an internal failure.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(JsonBody(T::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(JsonBody)
                .map_err(|e| AppError::MalformedBody(e.to_string())),
            Value::Array(_) => Ok(JsonBody(T::default())),
            other => Err(AppError::MalformedBody(format!(
                "Expected a JSON object or array, found {}",
                other
            ))),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Fallback for unmatched routes and methods
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Log internal failures and render them for the configured deployment mode
pub async fn error_boundary(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    match response.extensions().get::<InternalFailure>().cloned() {
        Some(InternalFailure(detail)) => {
            tracing::error!(%method, %uri, error = %detail, "Request failed");
            internal_error_response(state.config.mode, &detail)
        }
        None => response,
    }
}

/// Convert a handler panic into the 500 envelope
pub fn panic_response(mode: DeploymentMode, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(error = %detail, "Handler panicked");
    internal_error_response(mode, &detail)
}
