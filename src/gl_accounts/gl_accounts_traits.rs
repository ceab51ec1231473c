use super::gl_accounts_errors::Result;
use super::gl_accounts_model::{AccountRole, GlAccount, NewGlAccount};

/// Trait defining the contract for ledger-account repository operations.
pub trait GlAccountRepositoryTrait: Send + Sync {
    fn create(&self, new_gl_account: NewGlAccount) -> Result<GlAccount>;
    fn get_by_id(&self, gl_account_id: &str) -> Result<GlAccount>;
    fn find_by_linked_account(&self, user_id: &str, account_id: &str)
        -> Result<Option<GlAccount>>;
    fn find_by_role(&self, user_id: &str, role: &str) -> Result<Option<GlAccount>>;
    fn find_investment_bucket(&self, user_id: &str, currency: &str) -> Result<Option<GlAccount>>;
    fn find_name_contains(&self, user_id: &str, fragment: &str) -> Result<Option<GlAccount>>;
    fn list_by_kind(&self, user_id: &str, kind: &str) -> Result<Vec<GlAccount>>;
    fn list_by_user(&self, user_id: &str) -> Result<Vec<GlAccount>>;
}

/// Trait defining the contract of the ledger account directory.
///
/// Resolves a logical posting role to the owner's concrete ledger account.
pub trait GlAccountDirectoryTrait: Send + Sync {
    fn resolve(&self, user_id: &str, role: &AccountRole) -> Result<GlAccount>;
    fn named_contains(&self, user_id: &str, fragment: &str) -> Result<GlAccount>;
    fn list_by_kind(&self, user_id: &str, kind: &str) -> Result<Vec<GlAccount>>;
}
