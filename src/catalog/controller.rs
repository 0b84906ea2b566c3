use std::io::{BufRead, Write};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, Console, ControllerResult, user_message};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.repository.clone())
}

fn print_books<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[BookDto], empty: &str) -> ControllerResult {
    if books.is_empty() {
        console.say(empty)?;
    } else {
        for book in books {
            console.say(book.to_string().as_str())?;
        }
    }
    console.blank()
}

pub(crate) fn add_book<R: BufRead, W: Write>(state: &AppState, console: &mut Console<R, W>) -> ControllerResult {
    let Some(title) = console.ask_required("Please enter the title of the book: ", "title")? else {
        return Ok(());
    };
    let Some(author) = console.ask_required("Please enter the author of the book: ", "author")? else {
        return Ok(());
    };
    match AddBookCommand::new(build_service(state)).execute(AddBookCommandRequest::new(&title, &author)) {
        Ok(res) => {
            debug!(book_id = %res.book.book_id, "book added from console");
            console.say("Book added successfully.")?
        }
        Err(err) => {
            debug!(?err, "add book failed");
            console.say(user_message(&err).as_str())?
        }
    }
    console.blank()
}

pub(crate) fn view_books<R: BufRead, W: Write>(state: &AppState, console: &mut Console<R, W>) -> ControllerResult {
    match ListBooksCommand::new(build_service(state)).execute(ListBooksCommandRequest::default()) {
        Ok(res) => print_books(console, &res.books, "No books in the library."),
        Err(err) => {
            console.say(user_message(&err).as_str())?;
            console.blank()
        }
    }
}

pub(crate) fn search_books<R: BufRead, W: Write>(state: &AppState, console: &mut Console<R, W>) -> ControllerResult {
    let Some(query) = console.ask_raw("Enter book title or author to search: ")? else {
        return Ok(());
    };
    match SearchBooksCommand::new(build_service(state)).execute(SearchBooksCommandRequest::new(&query)) {
        Ok(res) => print_books(console, &res.books, "No books found."),
        Err(err) => {
            console.say(user_message(&err).as_str())?;
            console.blank()
        }
    }
}
