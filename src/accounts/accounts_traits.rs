use super::accounts_model::{Account, NewAccount};
use super::accounts_errors::Result;

/// Trait defining the contract for Account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    fn create(&self, new_account: NewAccount) -> Result<Account>;
    fn get_by_id(&self, account_id: &str) -> Result<Account>;
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Account>>;
}
