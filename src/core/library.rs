use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CatalogError {
    // A required field (title, isbn) was empty or otherwise illegal.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Illegal state transition: issuing an issued book or returning an
    // available one. The record is left untouched.
    Conflict {
        message: String,
    },
    // Backing file could not be read or written. The in-memory catalog stays
    // authoritative; a failed write is surfaced, not rolled back.
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    // Backing file exists but does not parse as a catalog.
    Corruption {
        message: String,
    },
}

impl CatalogError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> CatalogError {
        CatalogError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn conflict(message: &str) -> CatalogError {
        CatalogError::Conflict { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Storage { message: message.to_string(), reason_code }
    }

    pub fn corruption(message: &str) -> CatalogError {
        CatalogError::Corruption { message: message.to_string() }
    }

    // Only storage failures leave the file and memory out of sync, so they are
    // the only kind worth retrying.
    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Validation { .. } => { false }
            CatalogError::DuplicateKey { .. } => { false }
            CatalogError::NotFound { .. } => { false }
            CatalogError::Conflict { .. } => { false }
            CatalogError::Storage { .. } => { true }
            CatalogError::Corruption { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::storage(
            format!("catalog file io {:?}", err).as_str(),
            err.raw_os_error().map(|code| code.to_string()))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::corruption(
            format!("catalog json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Conflict { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Corruption { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Issued,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "issued" => BookStatus::Issued,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Issued => write!(f, "issued"),
        }
    }
}
