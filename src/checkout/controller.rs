use std::io::{BufRead, Write};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, Console, ControllerResult, user_message};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.repository.clone())
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, res: Result<BookDto, CommandError>, success: &str) -> ControllerResult {
    match res {
        Ok(book) => {
            debug!(book_id = %book.book_id, borrowed = book.is_borrowed, "checkout command done");
            console.say(success)?
        }
        Err(err) => {
            debug!(?err, "checkout command failed");
            console.say(user_message(&err).as_str())?
        }
    }
    console.blank()
}

pub(crate) fn borrow_book<R: BufRead, W: Write>(state: &AppState, console: &mut Console<R, W>) -> ControllerResult {
    let Some(title) = console.ask("Enter the title of the book to borrow: ")? else {
        return Ok(());
    };
    let cmd = CheckoutBookCommand::new(build_service(state));
    let req = CheckoutBookCommandRequest::new(&title);
    let res = match cmd.execute(req.clone()) {
        Err(CommandError::Ambiguous { .. }) => {
            let Some(author) = console.ask("Multiple books of the same title found. Enter the Author: ")? else {
                return Ok(());
            };
            cmd.execute(req.by_author(&author))
        }
        res => res,
    };
    report(console, res.map(|r| r.book), "Book borrowed successfully.")
}

pub(crate) fn return_book<R: BufRead, W: Write>(state: &AppState, console: &mut Console<R, W>) -> ControllerResult {
    let Some(title) = console.ask("Enter the title of the book to return: ")? else {
        return Ok(());
    };
    let cmd = ReturnBookCommand::new(build_service(state));
    let req = ReturnBookCommandRequest::new(&title);
    let res = match cmd.execute(req.clone()) {
        Err(CommandError::Ambiguous { .. }) => {
            let Some(author) = console.ask("Multiple borrowed copies of that title found. Enter the Author: ")? else {
                return Ok(());
            };
            cmd.execute(req.by_author(&author))
        }
        res => res,
    };
    report(console, res.map(|r| r.book), "Book returned successfully.")
}
