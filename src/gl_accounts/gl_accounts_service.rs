use log::debug;
use std::sync::Arc;

use super::gl_accounts_constants::*;
use super::gl_accounts_errors::{GlAccountError, Result};
use super::gl_accounts_model::{AccountRole, GlAccount};
use super::gl_accounts_traits::{GlAccountDirectoryTrait, GlAccountRepositoryTrait};

/// The ledger account directory.
///
/// Every lookup is scoped to one owner; a missing account is a
/// `ResolutionFailed` setup error, not a retryable condition.
pub struct GlAccountDirectory {
    repository: Arc<dyn GlAccountRepositoryTrait>,
}

impl GlAccountDirectory {
    pub fn new(repository: Arc<dyn GlAccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn resolve_role(&self, user_id: &str, role_key: &str) -> Result<GlAccount> {
        self.repository
            .find_by_role(user_id, role_key)?
            .ok_or_else(|| {
                GlAccountError::ResolutionFailed(format!(
                    "No {} ledger account configured for this owner",
                    role_key
                ))
            })
    }
}

impl GlAccountDirectoryTrait for GlAccountDirectory {
    fn resolve(&self, user_id: &str, role: &AccountRole) -> Result<GlAccount> {
        debug!("Resolving ledger account role {:?} for {}", role, user_id);

        match role {
            AccountRole::LinkedCash(account_id) => self
                .repository
                .find_by_linked_account(user_id, account_id)?
                .ok_or_else(|| {
                    GlAccountError::ResolutionFailed(format!(
                        "No ledger account linked to account {}. Seed it first.",
                        account_id
                    ))
                }),
            AccountRole::InvestmentBucket(currency) => self
                .repository
                .find_investment_bucket(user_id, currency)?
                .ok_or_else(|| {
                    GlAccountError::ResolutionFailed(format!(
                        "Investment bucket ledger account not found for {}",
                        currency
                    ))
                }),
            AccountRole::FeeExpense => self.resolve_role(user_id, ROLE_FEE_EXPENSE),
            AccountRole::DividendIncome => self.resolve_role(user_id, ROLE_DIVIDEND_INCOME),
            AccountRole::RealizedGainIncome => {
                self.resolve_role(user_id, ROLE_REALIZED_GAIN_INCOME)
            }
            AccountRole::RealizedLossExpense => {
                self.resolve_role(user_id, ROLE_REALIZED_LOSS_EXPENSE)
            }
            AccountRole::Equity => self.resolve_role(user_id, ROLE_EQUITY),
        }
    }

    /// Substring lookup kept for caller-driven account picking; callers must
    /// keep fragments unique per owner (multiple matches return the first).
    fn named_contains(&self, user_id: &str, fragment: &str) -> Result<GlAccount> {
        self.repository
            .find_name_contains(user_id, fragment)?
            .ok_or_else(|| {
                GlAccountError::ResolutionFailed(format!(
                    "Ledger account not found by name contains \"{}\"",
                    fragment
                ))
            })
    }

    fn list_by_kind(&self, user_id: &str, kind: &str) -> Result<Vec<GlAccount>> {
        self.repository.list_by_kind(user_id, kind)
    }
}
