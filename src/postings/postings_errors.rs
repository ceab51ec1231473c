use rust_decimal::Decimal;
use thiserror::Error;

use crate::accounts::AccountError;
use crate::gl::LedgerError;
use crate::gl_accounts::GlAccountError;
use crate::ownership::OwnershipError;

/// Custom error type for posting operations
#[derive(Debug, Error)]
pub enum PostingError {
    /// Non-positive amount on a manual posting command. Rejected before any
    /// lookup.
    #[error("Amount must be greater than zero (got {0})")]
    InvalidAmount(Decimal),
    /// An automatic posting was requested for a transaction type with no
    /// defined mapping.
    #[error("Unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),
    #[error("Ownership error: {0}")]
    Ownership(#[from] OwnershipError),
    #[error("Ledger account error: {0}")]
    Resolution(#[from] GlAccountError),
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Result type for posting operations
pub type Result<T> = std::result::Result<T, PostingError>;
