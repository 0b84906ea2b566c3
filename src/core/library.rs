use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// reason codes attached to Unavailable errors
pub const ALREADY_BORROWED: &str = "already_borrowed";
pub const NOT_BORROWED: &str = "not_borrowed";

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book exists but its lending status does not allow the requested transition,
    // e.g. borrowing a copy that is already out. The reason code tells which way.
    Unavailable {
        message: String,
        reason_code: Option<String>,
    },
    // More than one copy shares the requested title and no author was given to pick one.
    Ambiguous {
        message: String,
        candidates: usize,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string(), reason_code }
    }

    pub fn ambiguous(message: &str, candidates: usize) -> LibraryError {
        LibraryError::Ambiguous { message: message.to_string(), candidates }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Unavailable { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Ambiguous { message, candidates } => {
                write!(f, "{} ({} candidates)", message, candidates)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<bool> for BookStatus {
    fn from(is_borrowed: bool) -> Self {
        if is_borrowed {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
