//! Predicates over books. Every lookup the services perform goes through [`BookQuery`], so a
//! repository is free to answer it with a linear scan (as both current ones do) or an index.

use crate::books::domain::Book;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BookQuery {
    All,
    /// Case-insensitive exact match on the title.
    TitleEquals(String),
    /// Case-insensitive substring match on the title or the author. An empty needle matches
    /// every book.
    TitleOrAuthorContains(String),
}

impl BookQuery {
    pub fn matches<B: Book + ?Sized>(&self, book: &B) -> bool {
        match self {
            BookQuery::All => true,
            BookQuery::TitleEquals(title) => same_text(book.title(), title),
            BookQuery::TitleOrAuthorContains(needle) => {
                contains_text(book.title(), needle) || contains_text(book.author(), needle)
            }
        }
    }
}

pub(crate) fn same_text(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

pub(crate) fn contains_text(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::query::{BookQuery, contains_text, same_text};

    #[test]
    fn test_should_compare_ignoring_case() {
        assert!(same_text("Dune", "dUNE"));
        assert!(same_text("Éclair", "éCLAIR"));
        assert!(!same_text("Dune", "Dune Messiah"));
        assert!(contains_text("Dune Messiah", "MESS"));
        assert!(contains_text("anything", ""));
    }

    #[test]
    fn test_should_match_title_exactly() {
        let book = BookDto::new("Dune", "Frank Herbert");
        assert!(BookQuery::TitleEquals("dune".to_string()).matches(&book));
        assert!(!BookQuery::TitleEquals("Dun".to_string()).matches(&book));
        assert!(!BookQuery::TitleEquals("Frank Herbert".to_string()).matches(&book));
    }

    #[test]
    fn test_should_match_title_or_author_substring() {
        let book = BookDto::new("Dune", "Frank Herbert");
        assert!(BookQuery::TitleOrAuthorContains("UN".to_string()).matches(&book));
        assert!(BookQuery::TitleOrAuthorContains("herb".to_string()).matches(&book));
        assert!(BookQuery::TitleOrAuthorContains("".to_string()).matches(&book));
        assert!(!BookQuery::TitleOrAuthorContains("dune herbert".to_string()).matches(&book));
        assert!(BookQuery::All.matches(&book));
    }
}
