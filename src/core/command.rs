use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
        reason_code: Option<String>,
    },
    Ambiguous {
        message: String,
        candidates: usize,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Unavailable { message, reason_code } => {
                CommandError::Unavailable { message, reason_code }
            }
            LibraryError::Ambiguous { message, candidates } => {
                CommandError::Ambiguous { message, candidates }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_keep_disambiguation_details() {
        match CommandError::from(LibraryError::ambiguous("test", 3)) {
            CommandError::Ambiguous { candidates, .. } => assert_eq!(3, candidates),
            other => panic!("unexpected error {:?}", other),
        }
        match CommandError::from(LibraryError::unavailable("test", Some("already_borrowed".to_string()))) {
            CommandError::Unavailable { reason_code, .. } => assert_eq!(Some("already_borrowed".to_string()), reason_code),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
