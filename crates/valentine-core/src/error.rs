//! Error types for the Valentine card
//!
//! The flow and clock are infallible. Only the edges that touch the disk or
//! parse user-supplied values can fail.

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or supplied theme is neither "light" nor "dark"
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Target date/time does not exist on the calendar (or in local time)
    #[error("Invalid target date: {0}")]
    InvalidTarget(String),

    /// Configuration is structurally valid JSON but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidTheme("sepia".to_string());
        assert_eq!(format!("{}", err), "Invalid theme: sepia");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let card_err: CardError = json_err.into();
        assert!(matches!(card_err, CardError::Serialization(_)));
    }
}
