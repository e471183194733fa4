//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookInput, BookPatch},
    AppState,
};

use super::JsonBody;

/// Envelope for the full collection
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    /// Number of books in `data`
    pub count: usize,
    pub data: Vec<Book>,
}

/// Envelope for a single book
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Book,
}

impl BookResponse {
    fn found(book: Book) -> Self {
        Self {
            success: true,
            message: None,
            data: book,
        }
    }

    fn with_message(message: &str, book: Book) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: book,
        }
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.catalog.list_books()?;

    Ok(Json(BookListResponse {
        success: true,
        count: books.len(),
        data: books,
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(&id)?;
    Ok(Json(BookResponse::found(book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookInput>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.services.catalog.create_book(input)?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse::with_message("Book created successfully", book)),
    ))
}

/// Replace a book's title and author
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<BookInput>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.replace_book(&id, input)?;
    Ok(Json(BookResponse::with_message("Book updated successfully", book)))
}

/// Update only the provided fields of a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<BookPatch>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.patch_book(&id, patch)?;
    Ok(Json(BookResponse::with_message("Book updated successfully", book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted, returns its last values", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.delete_book(&id)?;
    Ok(Json(BookResponse::with_message("Book deleted successfully", book)))
}
