//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{books, root};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "1.0.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        root::api_index,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::patch_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookInput,
            crate::models::book::BookPatch,
            books::BookResponse,
            books::BookListResponse,
            root::ApiIndex,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "root", description = "Service discovery"),
        (name = "books", description = "Book catalog")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
