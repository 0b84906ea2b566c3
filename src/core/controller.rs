use std::io;
use std::io::{BufRead, Write};
use std::rc::Rc;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::ALREADY_BORROWED;
use crate::core::repository::RepositoryStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
    pub(crate) repository: Rc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        let repository = create_book_repository(&config, store);
        AppState {
            config,
            store,
            repository,
        }
    }
}

pub(crate) type ControllerResult = io::Result<()>;

/// Line-oriented console over any reader/writer pair, stdin/stdout in the binary and
/// in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.say("")
    }

    /// Reads one line with surrounding whitespace trimmed. `None` means end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.read_raw_line()?.map(|line| line.trim().to_string()))
    }

    /// Reads one line with only the line terminator removed. Bytes that are not valid UTF-8
    /// are replaced, never reported as an error.
    pub fn read_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    // like ask, but keeps leading and trailing spaces of the answer
    pub fn ask_raw(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_raw_line()
    }

    /// Keeps asking until a non-empty answer arrives or the input ends.
    pub fn ask_required(&mut self, prompt: &str, field: &str) -> io::Result<Option<String>> {
        let mut answer = self.ask(prompt)?;
        while let Some(value) = answer.as_deref() {
            if !value.is_empty() {
                break;
            }
            self.say(format!("The {} cannot be empty. {}", field, prompt).as_str())?;
            answer = self.read_line()?;
        }
        Ok(answer)
    }
}

// maps a command failure to the text shown to the user
pub(crate) fn user_message(err: &CommandError) -> String {
    match err {
        CommandError::NotFound { message } => {
            format!("{} Please try again.", message)
        }
        CommandError::Unavailable { message, reason_code } => {
            if reason_code.as_deref() == Some(ALREADY_BORROWED) {
                format!("{} Please try again later.", message)
            } else {
                message.to_string()
            }
        }
        CommandError::Ambiguous { message, .. } => {
            message.to_string()
        }
        CommandError::Validation { message, .. } => {
            format!("{} Please try again.", message)
        }
        CommandError::DuplicateKey { message } |
        CommandError::Serialization { message } |
        CommandError::Runtime { message, .. } => {
            format!("Something went wrong: {}", message)
        }
    }
}
