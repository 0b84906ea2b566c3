use std::rc::Rc;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::query::BookQuery;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Rc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Rc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    fn query(&self, predicate: &BookQuery) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(predicate)?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

fn validate_book(book: &BookDto) -> LibraryResult<()> {
    if book.title.trim().is_empty() {
        return Err(LibraryError::validation("The title of the book cannot be empty.", Some("title".to_string())));
    }
    if book.author.trim().is_empty() {
        return Err(LibraryError::validation("The author of the book cannot be empty.", Some("author".to_string())));
    }
    Ok(())
}

impl CatalogService for CatalogServiceImpl {
    fn load(&self) -> LibraryResult<usize> {
        self.book_repository.load()
    }

    fn save(&self) -> LibraryResult<()> {
        self.book_repository.save()
    }

    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book)?;
        let _ = self.book_repository.create(&BookEntity::from(book))?;
        info!(book_id = %book.book_id, title = %book.title, author = %book.author, "added book");
        Ok(book.clone())
    }

    fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book)?;
        let _ = self.book_repository.update(&BookEntity::from(book))?;
        info!(book_id = %book.book_id, borrowed = book.is_borrowed, "updated book");
        self.book_repository.get(book.id().as_str()).map(|b| BookDto::from(&b))
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.query(&BookQuery::All)
    }

    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.query(&BookQuery::TitleOrAuthorContains(query.to_string()))?;
        debug!(query, matched = res.len(), "searched books");
        Ok(res)
    }

    fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.query(&BookQuery::TitleEquals(title.to_string()))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            is_borrowed: other.is_borrowed,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            is_borrowed: other.is_borrowed,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
