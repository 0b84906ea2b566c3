use chrono::NaiveDateTime;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::{now, serializer};

// BookEntity is the persisted record of a single book in the library file. Field names follow
// the existing Library.json documents (Title, Author, IsBorrowed); id and timestamps are
// generated for records that predate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct BookEntity {
    #[serde(default = "new_book_id")]
    pub book_id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub is_borrowed: bool,
    #[serde(with = "serializer", default = "now")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer", default = "now")]
    pub updated_at: NaiveDateTime,
}

fn new_book_id() -> String {
    Uuid::new_v4().to_string()
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: new_book_id(),
            title: title.to_string(),
            author: author.to_string(),
            is_borrowed: false,
            created_at: now(),
            updated_at: now(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        BookStatus::from(self.is_borrowed)
    }
}

// LibraryDocument is the top-level shape of the library file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LibraryDocument {
    #[serde(default)]
    pub books: Vec<BookEntity>,
}
