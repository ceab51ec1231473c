use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for ownership/access checks.
///
/// `NotFound` means the resource does not exist; `Forbidden` means it exists
/// but the caller may not act on it. Both abort the request.
#[derive(Debug, Error)]
pub enum OwnershipError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for OwnershipError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => OwnershipError::NotFound("Record not found".to_string()),
            _ => OwnershipError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for ownership operations
pub type Result<T> = std::result::Result<T, OwnershipError>;
