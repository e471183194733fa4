//! In-memory book repository
//!
//! The ordered book list and the id counter sit behind one mutex, so id
//! assignment is atomic with insertion and at most one mutation runs at a time.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookChanges, BookId},
};

struct Shelf {
    books: Vec<Book>,
    next_id: BookId,
}

impl Shelf {
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    shelf: Arc<Mutex<Shelf>>,
}

impl BooksRepository {
    /// Create a repository holding `books`; new ids start above the highest one
    pub fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        Self {
            shelf: Arc::new(Mutex::new(Shelf { books, next_id })),
        }
    }

    /// Repository preloaded with the three catalog books served at startup
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald"),
            Book::new(2, "To Kill a Mockingbird", "Harper Lee"),
            Book::new(3, "1984", "George Orwell"),
        ])
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Shelf>> {
        self.shelf
            .lock()
            .map_err(|_| AppError::Internal("Book store lock poisoned".to_string()))
    }

    pub fn books_count(&self) -> AppResult<usize> {
        Ok(self.lock()?.books.len())
    }

    /// All books in insertion order
    pub fn books_list(&self) -> AppResult<Vec<Book>> {
        Ok(self.lock()?.books.clone())
    }

    pub fn books_get(&self, id: BookId) -> AppResult<Option<Book>> {
        let shelf = self.lock()?;
        Ok(shelf.position(id).map(|idx| shelf.books[idx].clone()))
    }

    /// Append a new book under the next id
    pub fn books_create(&self, title: String, author: String) -> AppResult<Book> {
        let mut shelf = self.lock()?;
        let book = Book {
            id: shelf.next_id,
            title,
            author,
        };
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        Ok(book)
    }

    /// Replace title and author in place
    pub fn books_replace(&self, id: BookId, title: String, author: String) -> AppResult<Option<Book>> {
        let mut shelf = self.lock()?;
        let Some(idx) = shelf.position(id) else {
            return Ok(None);
        };
        let book = &mut shelf.books[idx];
        book.title = title;
        book.author = author;
        Ok(Some(book.clone()))
    }

    /// Apply only the provided fields
    pub fn books_patch(&self, id: BookId, changes: BookChanges) -> AppResult<Option<Book>> {
        let mut shelf = self.lock()?;
        let Some(idx) = shelf.position(id) else {
            return Ok(None);
        };
        let book = &mut shelf.books[idx];
        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        Ok(Some(book.clone()))
    }

    /// Remove a book, returning its last values
    pub fn books_delete(&self, id: BookId) -> AppResult<Option<Book>> {
        let mut shelf = self.lock()?;
        Ok(shelf.position(id).map(|idx| shelf.books.remove(idx)))
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
