//! Book model and request bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub type BookId = i64;

/// A book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Service-assigned identifier, never reused
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Create or full-update request body.
///
/// Both fields are required and must be non-empty before trimming.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
}

impl BookInput {
    /// Validate presence and return the trimmed `(title, author)` pair
    pub fn into_fields(self) -> AppResult<(String, String)> {
        self.validate()
            .map_err(|_| AppError::Validation("Title and author are required".to_string()))?;

        match (self.title, self.author) {
            (Some(title), Some(author)) => Ok((title.trim().to_string(), author.trim().to_string())),
            _ => Err(AppError::Validation("Title and author are required".to_string())),
        }
    }
}

/// Partial-update request body.
///
/// The outer `Option` records whether the field was sent at all, the inner
/// one whether it was `null`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
}

/// Field changes resolved from a [`BookPatch`], already trimmed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    /// Resolve provided fields. An explicit `null` cannot be trimmed and is
    /// reported as an internal failure.
    pub fn into_changes(self) -> AppResult<BookChanges> {
        Ok(BookChanges {
            title: trim_provided("title", self.title)?,
            author: trim_provided("author", self.author)?,
        })
    }
}

fn trim_provided(field: &str, value: Option<Option<String>>) -> AppResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(Some(text)) => Ok(Some(text.trim().to_string())),
        Some(None) => Err(AppError::Internal(format!("Cannot trim null {}", field))),
    }
}
