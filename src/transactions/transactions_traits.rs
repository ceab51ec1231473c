use super::transactions_errors::Result;
use super::transactions_model::{NewTransaction, Transaction};

/// Trait defining the contract for Transaction repository operations.
pub trait TransactionRepositoryTrait: Send + Sync {
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;
    fn get_by_account_id(&self, account_id: &str) -> Result<Vec<Transaction>>;
}
