use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.query.as_str())
            .map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
