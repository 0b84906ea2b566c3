use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }
}
