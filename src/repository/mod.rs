//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding the process-lifetime stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    pub fn new(books: books::BooksRepository) -> Self {
        Self { books }
    }
}
