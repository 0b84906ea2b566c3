use std::cell::RefCell;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::query::BookQuery;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::date::now;

// Insertion-ordered books held for the lifetime of the process. Also backs the json file
// repository between load and save.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    books: RefCell<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace_all(&self, books: Vec<BookEntity>) -> usize {
        let mut current = self.books.borrow_mut();
        *current = books;
        current.len()
    }

    pub(crate) fn snapshot(&self) -> Vec<BookEntity> {
        self.books.borrow().clone()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let id = entity.id();
        let mut books = self.books.borrow_mut();
        if books.iter().any(|b| b.book_id == id) {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let id = entity.id();
        let mut books = self.books.borrow_mut();
        let existing = books.iter_mut().find(|b| b.book_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))?;
        *existing = entity.clone();
        existing.updated_at = now();
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.borrow().iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn load(&self) -> LibraryResult<usize> {
        Ok(self.books.borrow().len())
    }

    fn save(&self) -> LibraryResult<()> {
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn query(&self, predicate: &BookQuery) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.borrow();
        let records: Vec<BookEntity> = books.iter().filter(|b| predicate.matches(*b)).cloned().collect();
        debug!(?predicate, matched = records.len(), scanned = books.len(), "queried books");
        Ok(records)
    }
}
