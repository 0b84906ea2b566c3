use std::cell::Cell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::books::domain::model::{BookEntity, LibraryDocument};
use crate::books::query::BookQuery;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Keeps the catalog in memory and reads/writes it as a single JSON document.
#[derive(Debug)]
pub(crate) struct JsonBookRepository {
    path: PathBuf,
    books: MemoryBookRepository,
    // set when the last load found a file it could not read; that file is moved aside
    // before the first save replaces it
    preserve_on_save: Cell<bool>,
}

impl JsonBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            books: MemoryBookRepository::new(),
            preserve_on_save: Cell::new(false),
        }
    }

    fn backup_unreadable(&self) -> LibraryResult<()> {
        if !self.preserve_on_save.get() {
            return Ok(());
        }
        if self.path.is_file() {
            let backup = sibling_path(&self.path, ".bak");
            fs::rename(&self.path, &backup)?;
            warn!(path = %self.path.display(), backup = %backup.display(), "kept unreadable library file as backup");
        }
        self.preserve_on_save.set(false);
        Ok(())
    }

    fn write_document(&self, json: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = sibling_path(&self.path, ".tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            err
        })
    }
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

impl Repository<BookEntity> for JsonBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.create(entity)
    }

    fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id)
    }

    // Any failure leaves the repository empty; a missing file is reported as NotFound.
    fn load(&self) -> LibraryResult<usize> {
        self.books.replace_all(Vec::new());
        self.preserve_on_save.set(false);
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LibraryError::not_found(
                    format!("library file {} does not exist", self.path.display()).as_str()));
            }
            Err(err) => {
                self.preserve_on_save.set(true);
                return Err(LibraryError::from(err));
            }
        };
        let document: LibraryDocument = serde_json::from_str(&content).map_err(|err| {
            self.preserve_on_save.set(true);
            LibraryError::from(err)
        })?;
        let size = self.books.replace_all(document.books);
        info!(path = %self.path.display(), books = size, "loaded library");
        Ok(size)
    }

    fn save(&self) -> LibraryResult<()> {
        self.backup_unreadable()?;
        let document = LibraryDocument { books: self.books.snapshot() };
        let json = serde_json::to_string_pretty(&document)?;
        self.write_document(json.as_str())?;
        info!(path = %self.path.display(), books = document.books.len(), "saved library");
        Ok(())
    }
}

impl BookRepository for JsonBookRepository {
    fn query(&self, predicate: &BookQuery) -> LibraryResult<Vec<BookEntity>> {
        self.books.query(predicate)
    }
}
