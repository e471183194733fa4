//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookInput, BookPatch},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn count_books(&self) -> AppResult<usize> {
        self.repository.books.books_count()
    }

    pub fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.books_list()
    }

    /// Get a book by its raw path token
    pub fn get_book(&self, raw_id: &str) -> AppResult<Book> {
        let id = resolve_id(raw_id)?;
        self.repository
            .books
            .books_get(id)?
            .ok_or_else(|| not_found(id))
    }

    pub fn create_book(&self, input: BookInput) -> AppResult<Book> {
        let (title, author) = input.into_fields()?;
        let book = self.repository.books.books_create(title, author)?;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Full update. A missing book is reported before an invalid body.
    pub fn replace_book(&self, raw_id: &str, input: BookInput) -> AppResult<Book> {
        let id = resolve_id(raw_id)?;
        if self.repository.books.books_get(id)?.is_none() {
            return Err(not_found(id));
        }

        let (title, author) = input.into_fields()?;
        let book = self
            .repository
            .books
            .books_replace(id, title, author)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Book replaced");
        Ok(book)
    }

    pub fn patch_book(&self, raw_id: &str, patch: BookPatch) -> AppResult<Book> {
        let id = resolve_id(raw_id)?;
        if self.repository.books.books_get(id)?.is_none() {
            return Err(not_found(id));
        }

        let changes = patch.into_changes()?;
        let book = self
            .repository
            .books
            .books_patch(id, changes)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Book patched");
        Ok(book)
    }

    pub fn delete_book(&self, raw_id: &str) -> AppResult<Book> {
        let id = resolve_id(raw_id)?;
        let book = self
            .repository
            .books
            .books_delete(id)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Book deleted");
        Ok(book)
    }
}

fn resolve_id(raw_id: &str) -> AppResult<BookId> {
    parse_book_id(raw_id).ok_or_else(|| {
        tracing::debug!(raw_id, "Book id is not numeric");
        AppError::book_not_found()
    })
}

fn not_found(id: BookId) -> AppError {
    tracing::debug!(id, "Book not found");
    AppError::book_not_found()
}

/// Parse the leading integer of a path token.
///
/// Leading whitespace is skipped and an optional sign accepted. A `0x`/`0X`
/// prefix switches to hexadecimal. Parsing stops at the first character that
/// is not a digit in the chosen radix, so `"2abc"` yields 2 and `"0x2"` yields 2.
/// Returns `None` when no digit follows or the value does not fit a [`BookId`].
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let value = BookId::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -value } else { value })
}
