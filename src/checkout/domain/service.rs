use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::books::query::same_text;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::library::{ALREADY_BORROWED, LibraryError, LibraryResult, NOT_BORROWED};

pub(crate) struct CheckoutServiceImpl {
    catalog_service: Box<dyn CatalogService>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.catalog_service.find_books_by_title(title)?;
        if res.is_empty() {
            return Err(LibraryError::not_found(format!("No book titled \"{}\" was found.", title).as_str()));
        }
        Ok(res)
    }
}

fn require_author<'a>(author: Option<&'a str>, title: &str, candidates: usize) -> LibraryResult<&'a str> {
    author.ok_or_else(|| LibraryError::ambiguous(
        format!("Multiple books titled \"{}\" were found.", title).as_str(), candidates))
}

// copies whose author matches, in catalog order
fn by_author(copies: Vec<BookDto>, author: &str) -> Vec<BookDto> {
    copies.into_iter().filter(|b| same_text(b.author.as_str(), author)).collect()
}

impl CheckoutService for CheckoutServiceImpl {
    fn checkout(&self, title: &str, author: Option<&str>) -> LibraryResult<BookDto> {
        let mut copies = self.find_by_title(title)?;
        let mut book = if copies.len() == 1 {
            copies.remove(0)
        } else {
            let author = require_author(author, title, copies.len())?;
            let mut copies = by_author(copies, author);
            if copies.is_empty() {
                return Err(LibraryError::not_found(
                    format!("No copy of \"{}\" by {} was found.", title, author).as_str()));
            }
            // prefer an available copy; otherwise fall through to the already-borrowed report
            let pos = copies.iter().position(|b| !b.is_borrowed()).unwrap_or(0);
            copies.swap_remove(pos)
        };
        if book.is_borrowed() {
            return Err(LibraryError::unavailable(
                format!("\"{}\" by {} is already borrowed.", book.title, book.author).as_str(),
                Some(ALREADY_BORROWED.to_string())));
        }
        book.is_borrowed = true;
        let book = self.catalog_service.update_book(&book)?;
        info!(book_id = %book.book_id, title = %book.title, "book borrowed");
        Ok(book)
    }

    fn returned(&self, title: &str, author: Option<&str>) -> LibraryResult<BookDto> {
        let copies = self.find_by_title(title)?;
        let mut borrowed: Vec<BookDto> = copies.into_iter().filter(|b| b.is_borrowed()).collect();
        let mut book = match borrowed.len() {
            0 => {
                return Err(LibraryError::unavailable(
                    format!("\"{}\" is not currently borrowed.", title).as_str(),
                    Some(NOT_BORROWED.to_string())));
            }
            1 => borrowed.remove(0),
            n => {
                let author = require_author(author, title, n)?;
                by_author(borrowed, author).into_iter().next().ok_or_else(|| LibraryError::not_found(
                    format!("No borrowed copy of \"{}\" by {} was found.", title, author).as_str()))?
            }
        };
        book.is_borrowed = false;
        let book = self.catalog_service.update_book(&book)?;
        info!(book_id = %book.book_id, title = %book.title, "book returned");
        Ok(book)
    }
}
