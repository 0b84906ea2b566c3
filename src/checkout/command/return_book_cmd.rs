use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ReturnBookCommandRequest {
    title: String,
    author: Option<String>,
}

impl ReturnBookCommandRequest {
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
pub(crate) struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.title.as_str(), req.author.as_deref())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
