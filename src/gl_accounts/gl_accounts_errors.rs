use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for ledger-account directory operations
#[derive(Debug, Error)]
pub enum GlAccountError {
    /// A required role/linked ledger account is missing for the owner.
    /// Signals missing setup data; never retried automatically.
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for GlAccountError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => GlAccountError::NotFound("Record not found".to_string()),
            _ => GlAccountError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for ledger-account operations
pub type Result<T> = std::result::Result<T, GlAccountError>;
