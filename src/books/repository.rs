pub mod json_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::books::query::BookQuery;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub(crate) trait BookRepository: Repository<BookEntity> {
    // matching books in catalog order
    fn query(&self, predicate: &BookQuery) -> LibraryResult<Vec<BookEntity>>;
}
