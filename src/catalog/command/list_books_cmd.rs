use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books().map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_list_books() {
        let config = Configuration::new("test.json");
        let repo = create_book_repository(&config, RepositoryStore::InMemory);
        let add_cmd = AddBookCommand::new(create_catalog_service(&config, Rc::clone(&repo)));
        let list_cmd = ListBooksCommand::new(create_catalog_service(&config, repo));

        assert!(list_cmd.execute(ListBooksCommandRequest::default()).expect("should list").books.is_empty());
        add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert")).expect("should add book");
        add_cmd.execute(AddBookCommandRequest::new("Emma", "Austen")).expect("should add book");

        let res = list_cmd.execute(ListBooksCommandRequest::default()).expect("should list");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Emma"], titles);
    }
}
