use std::rc::Rc;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Rc<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Rc::new(JsonBookRepository::new(config.library_file.as_path()))
        }
        RepositoryStore::InMemory => {
            Rc::new(MemoryBookRepository::new())
        }
    }
}
