//! Common error types for the salon services

use thiserror::Error;

/// Common result type for salon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the API server and the report tool
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Not-found error for a client id that does not exist
    pub fn client_not_found(client_id: i64) -> Self {
        Error::NotFound(format!("Client {} not found", client_id))
    }
}
