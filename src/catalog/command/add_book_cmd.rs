use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str())
    }
}


#[derive(Debug)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn add_cmd() -> AddBookCommand {
        let config = Configuration::new("test.json");
        let svc = factory::create_catalog_service(&config, create_book_repository(&config, RepositoryStore::InMemory));
        AddBookCommand::new(svc)
    }

    #[test]
    fn test_should_run_add_book() {
        let cmd = add_cmd();
        let res = cmd.execute(AddBookCommandRequest::new(" 1984 ", "Orwell"))
            .expect("should add book");
        assert_eq!("1984", res.book.title);
        assert_eq!("Orwell", res.book.author);
        assert!(!res.book.is_borrowed);
    }

    #[test]
    fn test_should_fail_add_book_without_author() {
        let cmd = add_cmd();
        let res = cmd.execute(AddBookCommandRequest::new("1984", " "));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
