use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CheckoutBookCommandRequest {
    title: String,
    author: Option<String>,
}

impl CheckoutBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            author: None,
        }
    }

    pub fn by_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }
}


#[derive(Debug)]
pub(crate) struct CheckoutBookCommandResponse {
    pub book: BookDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.title.as_str(), req.author.as_deref())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
