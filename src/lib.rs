pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod session;
pub mod utils;
