use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // Business rule violation: the isbn is already registered. Recoverable,
    // the message is meant to be shown to the caller.
    DuplicateIsbn {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Caller bug, e.g. updating or removing a book that was never persisted.
    InvalidArgument {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_isbn(message: &str) -> CatalogError {
        CatalogError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn invalid_argument(message: &str) -> CatalogError {
        CatalogError::InvalidArgument { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Database { retryable, .. } => { *retryable }
            CatalogError::DuplicateIsbn { .. } => { false }
            CatalogError::NotFound { .. } => { false }
            CatalogError::InvalidArgument { .. } => { false }
            CatalogError::Validation { .. } => { false }
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::DuplicateIsbn { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::InvalidArgument { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for catalog and repository operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// It defines abstraction for a page of query results
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // zero-based page index as requested by the caller
    pub page: usize,
    // page size as applied by the store
    pub page_size: usize,
    // records matching the predicate across all pages
    pub total_elements: usize,
    // list of records for this page
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: usize, page_size: usize,
                      total_elements: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            page,
            page_size,
            total_elements,
            records,
        }
    }
}
