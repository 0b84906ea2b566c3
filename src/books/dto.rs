use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for the catalog and checkout services
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub is_borrowed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str) -> BookDto {
        BookDto::from(&BookEntity::new(title, author))
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
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

// one listing line, as shown by view and search
impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Status: {}", self.title, self.author, self.status())
    }
}
