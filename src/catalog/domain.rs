pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub(crate) trait CatalogService {
    fn load(&self) -> LibraryResult<usize>;
    fn save(&self) -> LibraryResult<()>;
    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
}
