//! Root discovery endpoint

use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ApiIndex {
    /// Service greeting
    pub message: String,
    /// Version of the service
    pub version: String,
    /// Route signature to description, in declaration order
    #[schema(value_type = Object)]
    pub endpoints: IndexMap<String, String>,
}

const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /books", "Get all books"),
    ("GET /books/:id", "Get a specific book"),
    ("POST /books", "Create a new book"),
    ("PUT /books/:id", "Update a book (full update)"),
    ("PATCH /books/:id", "Update a book (partial update)"),
    ("DELETE /books/:id", "Delete a book"),
];

/// Describe the service and its routes
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Service description", body = ApiIndex)
    )
)]
pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Welcome to Books API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(route, description)| (route.to_string(), description.to_string()))
            .collect(),
    })
}
