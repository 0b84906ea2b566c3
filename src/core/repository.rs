use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // create an entity
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // replaces in-memory state with the backing store, returns number of entities read
    fn load(&self) -> LibraryResult<usize>;

    // writes in-memory state back to the backing store
    fn save(&self) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}
