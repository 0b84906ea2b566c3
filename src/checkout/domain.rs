use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

// Borrow and return address a book by title; when several copies share the title the author
// picks one, and without an author the call fails with LibraryError::Ambiguous.
pub(crate) trait CheckoutService {
    fn checkout(&self, title: &str, author: Option<&str>) -> LibraryResult<BookDto>;
    fn returned(&self, title: &str, author: Option<&str>) -> LibraryResult<BookDto>;
}
