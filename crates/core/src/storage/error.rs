use thiserror::Error;

use crate::customer::ParseCustomerIdError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ParseCustomerIdError> for RepositoryError {
    fn from(err: ParseCustomerIdError) -> Self {
        RepositoryError::InvalidId(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
