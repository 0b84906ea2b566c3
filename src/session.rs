//! The interactive read-dispatch-respond loop.
//!
//! A [`Session`] loads the library once, shows the numbered menu until the user picks Exit
//! (or input ends), and writes the library back on the way out. A failed save keeps the
//! session open so nothing is lost; the user can pick Exit again to retry.

use std::io;
use std::io::{BufRead, Write};
use tracing::{error, info, warn};
use crate::catalog::controller::{add_book, search_books, view_books};
use crate::catalog::factory::create_catalog_service;
use crate::checkout::controller::{borrow_book, return_book};
use crate::core::controller::{AppState, Console, ControllerResult};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

type Handler<R, W> = fn(&AppState, &mut Console<R, W>) -> ControllerResult;

enum Route<R, W> {
    Action(Handler<R, W>),
    Exit,
}

// Menu maps the keys typed by the user to handlers, in display order.
struct Menu<R, W> {
    title: &'static str,
    entries: Vec<(&'static str, &'static str, Route<R, W>)>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    fn route(mut self, key: &'static str, label: &'static str, route: Route<R, W>) -> Self {
        self.entries.push((key, label, route));
        self
    }

    fn render(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.say(self.title)?;
        for (key, label, _) in &self.entries {
            console.say(format!("{}. {}", key, label).as_str())?;
        }
        console.say("Please enter a command: ")
    }

    fn dispatch(&self, key: &str) -> Option<&Route<R, W>> {
        self.entries.iter().find(|(k, _, _)| *k == key).map(|(_, _, route)| route)
    }

    fn library() -> Self {
        Menu::new("Library Management System")
            .route("1", "Add a book", Route::Action(add_book))
            .route("2", "View books", Route::Action(view_books))
            .route("3", "Search for a book", Route::Action(search_books))
            .route("4", "Borrow a book", Route::Action(borrow_book))
            .route("5", "Return a book", Route::Action(return_book))
            .route("6", "Exit", Route::Exit)
    }
}

pub struct Session {
    state: AppState,
}

impl Session {
    pub fn new(config: Configuration, store: RepositoryStore) -> Self {
        Self {
            state: AppState::new(config, store),
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        self.bootstrap(console)?;
        let menu = Menu::library();
        loop {
            menu.render(console)?;
            let choice = console.read_line()?;
            console.blank()?;
            let Some(choice) = choice else {
                info!("end of input, closing session");
                self.shutdown(console)?;
                return Ok(());
            };
            match menu.dispatch(choice.as_str()) {
                Some(Route::Action(handler)) => handler(&self.state, console)?,
                Some(Route::Exit) => {
                    if self.shutdown(console)? {
                        return Ok(());
                    }
                }
                None => {
                    console.say("Invalid command. Please try again.")?;
                    console.blank()?;
                }
            }
        }
    }

    fn bootstrap<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ControllerResult {
        let catalog_svc = create_catalog_service(&self.state.config, self.state.repository.clone());
        let path = self.state.config.library_file.display();
        match catalog_svc.load() {
            Ok(size) => {
                info!(%path, books = size, store = ?self.state.store, "library loaded");
                console.say("Library loaded successfully.")?;
            }
            Err(err) if err.is_not_found() => {
                info!(%path, %err, "starting with an empty library");
                console.say("No library file found. Starting a new library.")?;
            }
            Err(err) => {
                warn!(%path, %err, "could not read library, starting with an empty one");
                console.say("Error reading library from file. Creating a new library.")?;
            }
        }
        console.blank()
    }

    // returns whether the library was written
    fn shutdown<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<bool> {
        let catalog_svc = create_catalog_service(&self.state.config, self.state.repository.clone());
        match catalog_svc.save() {
            Ok(()) => {
                console.say("Library saved. Goodbye!")?;
                Ok(true)
            }
            Err(err) => {
                error!(path = %self.state.config.library_file.display(), %err, "could not save library");
                console.say(format!("Could not save the library: {}", err).as_str())?;
                console.say("Your changes are still here. Choose 6 again to retry.")?;
                console.blank()?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;
    use crate::core::controller::Console;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::session::Session;

    fn run_session(library_file: &Path, input: &str) -> String {
        run_session_bytes(library_file, input.as_bytes())
    }

    fn run_session_bytes(library_file: &Path, input: &[u8]) -> String {
        let config = Configuration::new(library_file.to_str().expect("utf8 path"));
        let session = Session::new(config, RepositoryStore::JsonFile);
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        session.run(&mut console).expect("session should end cleanly");
        String::from_utf8(console.into_output()).expect("should be utf8")
    }

    #[test]
    fn test_should_run_end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        let out = run_session(&path, "1\n1984\nOrwell\n2\n4\n1984\n2\n5\n1984\n2\n6\n");

        assert!(out.starts_with("No library file found."));
        assert!(out.contains("1. Add a book\n2. View books\n3. Search for a book\n4. Borrow a book\n5. Return a book\n6. Exit\n"));
        let available = "Title: 1984, Author: Orwell, Status: Available";
        let borrowed = "Title: 1984, Author: Orwell, Status: Borrowed";
        let first = out.find(available).expect("listed as available");
        let middle = out.find(borrowed).expect("listed as borrowed");
        let last = out.rfind(available).expect("listed as available again");
        assert!(first < middle && middle < last);
        assert_eq!(1, out.matches(borrowed).count());
        assert!(out.contains("Book borrowed successfully."));
        assert!(out.contains("Book returned successfully."));
        assert!(out.ends_with("Library saved. Goodbye!\n"));

        let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(1, saved["Books"].as_array().expect("books array").len());
        assert_eq!("1984", saved["Books"][0]["Title"]);
        assert_eq!(false, saved["Books"][0]["IsBorrowed"]);
    }

    #[test]
    fn test_should_keep_state_across_sessions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        run_session(&path, "1\nDune\nHerbert\n4\nDune\n6\n");
        let out = run_session(&path, "2\n6\n");
        assert!(out.starts_with("Library loaded successfully."));
        assert!(out.contains("Title: Dune, Author: Herbert, Status: Borrowed"));
    }

    #[test]
    fn test_should_recover_from_malformed_library() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        fs::write(&path, "this is not json").unwrap();
        let out = run_session(&path, "2\n1\nDune\nHerbert\n2\n6\n");
        assert!(out.starts_with("Error reading library from file. Creating a new library."));
        assert!(out.contains("No books in the library."));
        assert!(out.contains("Title: Dune, Author: Herbert, Status: Available"));
        assert_eq!("this is not json", fs::read_to_string(dir.path().join("Library.json.bak")).unwrap());
    }

    #[test]
    fn test_should_reject_unknown_commands() {
        let dir = TempDir::new().unwrap();
        let out = run_session(&dir.path().join("Library.json"), "9\nadd\n\n6\n");
        assert_eq!(3, out.matches("Invalid command. Please try again.").count());
        assert_eq!(4, out.matches("Library Management System").count());
    }

    #[test]
    fn test_should_survive_invalid_utf8_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        let out = run_session_bytes(&path, b"1\nDune\nHerbert\n\xff\n2\n6\n");
        assert_eq!(1, out.matches("Invalid command. Please try again.").count());
        assert!(out.contains("Title: Dune, Author: Herbert, Status: Available"));
        assert!(out.ends_with("Library saved. Goodbye!\n"));
        let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!("Dune", saved["Books"][0]["Title"]);
    }

    #[test]
    fn test_should_save_at_end_of_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        let out = run_session(&path, "1\nEmma\nAusten\n");
        assert!(out.ends_with("Library saved. Goodbye!\n"));
        let out = run_session(&path, "3\naust\n");
        assert!(out.contains("Title: Emma, Author: Austen, Status: Available"));
    }

    #[test]
    fn test_should_stay_open_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        fs::create_dir(&path).unwrap();
        let out = run_session(&path, "1\nDune\nHerbert\n6\n2\n");
        assert!(out.contains("Could not save the library:"));
        assert!(out.contains("Choose 6 again to retry."));
        // the session kept going after the failed exit and still had the book
        assert!(out.contains("Title: Dune, Author: Herbert, Status: Available"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_should_borrow_between_duplicate_titles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Library.json");
        let out = run_session(&path, "1\nDune\nAuthor A\n1\nDune\nAuthor B\n4\nDune\nAuthor B\n4\nDune\nAuthor B\n4\nDune\nAuthor A\n2\n6\n");
        assert_eq!(2, out.matches("Book borrowed successfully.").count());
        assert!(out.contains("\"Dune\" by Author B is already borrowed. Please try again later."));
        assert!(out.contains("Title: Dune, Author: Author A, Status: Borrowed"));
        assert!(out.contains("Title: Dune, Author: Author B, Status: Borrowed"));
    }
}
