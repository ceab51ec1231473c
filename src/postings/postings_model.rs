use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::postings_errors::{PostingError, Result};

/// Manual posting: move cash between two of the caller's ledger accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCommand {
    pub from_gl_account_id: String,
    pub to_gl_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
}

/// Manual posting: book an expense paid from a cash ledger account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCommand {
    pub pay_from_gl_account_id: String,
    pub expense_gl_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
}

/// Manual posting: book income received into a cash ledger account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeCommand {
    pub receive_to_gl_account_id: String,
    pub income_gl_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
}

fn ensure_positive_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(PostingError::InvalidAmount(amount));
    }
    Ok(())
}

impl TransferCommand {
    pub fn validate(&self) -> Result<()> {
        ensure_positive_amount(self.amount)
    }
}

impl ExpenseCommand {
    pub fn validate(&self) -> Result<()> {
        ensure_positive_amount(self.amount)
    }
}

impl IncomeCommand {
    pub fn validate(&self) -> Result<()> {
        ensure_positive_amount(self.amount)
    }
}
