use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    DuplicateId {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book is already held by a reader, possibly the one asking for it.
    BookUnavailable {
        message: String,
    },
    RentalLimitExceeded {
        message: String,
        limit: usize,
    },
    NotBorrowedByReader {
        message: String,
    },
    InvalidArgument {
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
    pub fn duplicate_id(message: &str) -> LibraryError {
        LibraryError::DuplicateId { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::BookUnavailable { message: message.to_string() }
    }

    pub fn rental_limit_exceeded(message: &str, limit: usize) -> LibraryError {
        LibraryError::RentalLimitExceeded { message: message.to_string(), limit }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowedByReader { message: message.to_string() }
    }

    pub fn invalid_argument(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateId { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::BookUnavailable { message } => { message }
            LibraryError::RentalLimitExceeded { message, .. } => { message }
            LibraryError::NotBorrowedByReader { message } => { message }
            LibraryError::InvalidArgument { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::RentalLimitExceeded { message, limit } => {
                write!(f, "{} (limit {})", message, limit)
            }
            LibraryError::InvalidArgument { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            other => {
                write!(f, "{}", other.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// SearchIndex names the secondary index a search hit came from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchIndex {
    Title,
    Author,
    Reader,
}
