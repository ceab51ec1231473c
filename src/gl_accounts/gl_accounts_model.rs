use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::gl_accounts_constants::*;
use super::gl_accounts_errors::{GlAccountError, Result};

/// Domain model representing a ledger account.
///
/// A named bucket belonging to exactly one owner, read-only to the posting
/// engine. `linked_account_id` ties a ledger account 1:1 to the external
/// cash/brokerage account it mirrors; `role` is the explicit key the
/// directory resolves posting legs through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlAccount {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub role: Option<String>,
    pub linked_account_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new ledger account (seeding/administration)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGlAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub role: Option<String>,
    pub linked_account_id: Option<String>,
}

impl NewGlAccount {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GlAccountError::InvalidData(
                "Ledger account name cannot be empty".to_string(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(GlAccountError::InvalidData(
                "Currency cannot be empty".to_string(),
            ));
        }
        if GlAccountKind::from_str(&self.kind).is_err() {
            return Err(GlAccountError::InvalidData(format!(
                "Unknown ledger account kind: {}",
                self.kind
            )));
        }
        Ok(())
    }
}

/// Database model for ledger accounts
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::gl_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct GlAccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub role: Option<String>,
    pub linked_account_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<GlAccountDB> for GlAccount {
    fn from(db: GlAccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            kind: db.kind,
            currency: db.currency,
            role: db.role,
            linked_account_id: db.linked_account_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewGlAccount> for GlAccountDB {
    fn from(domain: NewGlAccount) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            name: domain.name,
            kind: domain.kind,
            currency: domain.currency,
            role: domain.role,
            linked_account_id: domain.linked_account_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Ledger account kind enum for type-safe handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlAccountKind {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
}

impl GlAccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlAccountKind::Asset => GL_ACCOUNT_KIND_ASSET,
            GlAccountKind::Liability => GL_ACCOUNT_KIND_LIABILITY,
            GlAccountKind::Equity => GL_ACCOUNT_KIND_EQUITY,
            GlAccountKind::Income => GL_ACCOUNT_KIND_INCOME,
            GlAccountKind::Expense => GL_ACCOUNT_KIND_EXPENSE,
        }
    }
}

impl FromStr for GlAccountKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == GL_ACCOUNT_KIND_ASSET => Ok(GlAccountKind::Asset),
            s if s == GL_ACCOUNT_KIND_LIABILITY => Ok(GlAccountKind::Liability),
            s if s == GL_ACCOUNT_KIND_EQUITY => Ok(GlAccountKind::Equity),
            s if s == GL_ACCOUNT_KIND_INCOME => Ok(GlAccountKind::Income),
            s if s == GL_ACCOUNT_KIND_EXPENSE => Ok(GlAccountKind::Expense),
            _ => Err(format!("Unknown ledger account kind: {}", s)),
        }
    }
}

/// A logical posting role the directory resolves to a concrete ledger
/// account for a given owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRole {
    /// The ledger account mirroring an external cash/brokerage account.
    LinkedCash(String),
    /// The asset bucket holding security cost basis for a currency.
    InvestmentBucket(String),
    FeeExpense,
    DividendIncome,
    RealizedGainIncome,
    RealizedLossExpense,
    Equity,
}

impl AccountRole {
    /// The role key stored on `gl_accounts.role`, when the role resolves
    /// through the mapping table (LinkedCash resolves through the account
    /// link instead).
    pub fn key(&self) -> Option<&'static str> {
        match self {
            AccountRole::LinkedCash(_) => None,
            AccountRole::InvestmentBucket(_) => Some(ROLE_INVESTMENT_BUCKET),
            AccountRole::FeeExpense => Some(ROLE_FEE_EXPENSE),
            AccountRole::DividendIncome => Some(ROLE_DIVIDEND_INCOME),
            AccountRole::RealizedGainIncome => Some(ROLE_REALIZED_GAIN_INCOME),
            AccountRole::RealizedLossExpense => Some(ROLE_REALIZED_LOSS_EXPENSE),
            AccountRole::Equity => Some(ROLE_EQUITY),
        }
    }
}
