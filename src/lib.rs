//! Books API
//!
//! A small REST JSON server managing an in-memory catalog of books.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mode = state.config.mode;

    // Known paths answer unknown methods with the plain 404 too
    Router::new()
        .route("/", get(api::root::api_index).fallback(api::not_found))
        .route(
            "/books",
            get(api::books::list_books)
                .post(api::books::create_book)
                .fallback(api::not_found),
        )
        .route(
            "/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .patch(api::books::patch_book)
                .delete(api::books::delete_book)
                .fallback(api::not_found),
        )
        .route(
            "/api-docs/openapi.json",
            get(api::openapi::openapi_json).fallback(api::not_found),
        )
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), api::error_boundary))
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn std::any::Any + Send + 'static>| {
            api::panic_response(mode, panic)
        }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Router behind trailing-slash normalization, so `/books/` routes as `/books`.
///
/// Path rewriting has to happen before routing, hence the wrapper instead of a
/// router layer.
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(create_router(state))
}
