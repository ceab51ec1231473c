use super::ownership_errors::Result;

/// Trait defining the contract of the ownership/access gate.
///
/// A check passes when the caller owns the resource or is an admin.
pub trait OwnershipGateTrait: Send + Sync {
    fn ensure_account_access(&self, account_id: &str, caller_id: &str) -> Result<()>;
    fn ensure_gl_account_access(&self, gl_account_id: &str, caller_id: &str) -> Result<()>;
    fn ensure_transaction_access(&self, transaction_id: &str, caller_id: &str) -> Result<()>;
    fn ensure_gl_entry_access(&self, gl_entry_id: &str, caller_id: &str) -> Result<()>;
    fn account_exists(&self, account_id: &str) -> Result<bool>;
    fn user_exists(&self, user_id: &str) -> Result<bool>;
}
