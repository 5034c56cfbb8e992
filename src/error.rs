//! Error types for the SQL Server catalog model.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog metadata operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A catalog record or record source could not be read.
    #[error("Data access error: {message}")]
    DataAccess { message: String },

    /// The referenced data type is not present in the type catalog.
    #[error("Unknown user type id: {user_type_id}")]
    TypeNotFound { user_type_id: i32 },

    /// A load was abandoned because the progress monitor was canceled.
    #[error("Operation canceled")]
    Canceled,
}

impl Error {
    /// Create a data access error.
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess {
            message: message.into(),
        }
    }
}
