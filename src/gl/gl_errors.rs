use diesel::result::Error as DieselError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for ledger entry operations
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Debit and credit totals differ. Carries both totals verbatim so the
    /// caller can see the drift.
    #[error("Entry not balanced: debit={debit}, credit={credit}")]
    NotBalanced { debit: Decimal, credit: Decimal },
    #[error("All lines in an entry must share one currency")]
    MixedCurrency,
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for LedgerError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => LedgerError::NotFound("Record not found".to_string()),
            _ => LedgerError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for ledger entry operations
pub type Result<T> = std::result::Result<T, LedgerError>;
