use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transactions_errors::{Result, TransactionError};

/// Helper function to parse a stored string into a Decimal,
/// with support for scientific notation.
fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Domain model representing a business transaction.
///
/// The posting engine treats this as an immutable input; it is created and
/// edited by the CRUD layer and only ever read here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub transaction_type: String,
    pub amount: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fee: Option<Decimal>,
    /// Caller-supplied disposed cost basis for sells. Unverified against
    /// holdings; a position tracker may replace it via `CostBasisSourceTrait`.
    pub cost: Option<Decimal>,
    pub trade_time: NaiveDateTime,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new transaction (seeding/CRUD surface)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub transaction_type: String,
    pub amount: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub trade_time: NaiveDateTime,
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "Account ID cannot be empty".to_string(),
            ));
        }
        if TransactionType::from_str(&self.transaction_type).is_err() {
            return Err(TransactionError::InvalidData(format!(
                "Unknown transaction type: {}",
                self.transaction_type
            )));
        }
        Ok(())
    }
}

/// Database model for transactions
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct TransactionDB {
    pub id: String,
    pub account_id: String,
    pub transaction_type: String,
    pub amount: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub fee: Option<String>,
    pub cost: Option<String>,
    pub trade_time: NaiveDateTime,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            transaction_type: db.transaction_type,
            amount: db
                .amount
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "amount")),
            quantity: db
                .quantity
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "quantity")),
            price: db
                .price
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "price")),
            fee: db
                .fee
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "fee")),
            cost: db
                .cost
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "cost")),
            trade_time: db.trade_time,
            note: db.note,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            account_id: domain.account_id,
            transaction_type: domain.transaction_type,
            amount: domain.amount.map(|d| d.to_string()),
            quantity: domain.quantity.map(|d| d.to_string()),
            price: domain.price.map(|d| d.to_string()),
            fee: domain.fee.map(|d| d.to_string()),
            cost: domain.cost.map(|d| d.to_string()),
            trade_time: domain.trade_time,
            note: domain.note,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Transaction type enum for type-safe handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Transfer,
    Expense,
    Income,
    Deposit,
    Withdraw,
    Buy,
    Sell,
    Dividend,
    Fee,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        use crate::transactions::transactions_constants::*;
        match self {
            TransactionType::Transfer => TRANSACTION_TYPE_TRANSFER,
            TransactionType::Expense => TRANSACTION_TYPE_EXPENSE,
            TransactionType::Income => TRANSACTION_TYPE_INCOME,
            TransactionType::Deposit => TRANSACTION_TYPE_DEPOSIT,
            TransactionType::Withdraw => TRANSACTION_TYPE_WITHDRAW,
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
            TransactionType::Dividend => TRANSACTION_TYPE_DIVIDEND,
            TransactionType::Fee => TRANSACTION_TYPE_FEE,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::transactions::transactions_constants::*;
        match s {
            s if s == TRANSACTION_TYPE_TRANSFER => Ok(TransactionType::Transfer),
            s if s == TRANSACTION_TYPE_EXPENSE => Ok(TransactionType::Expense),
            s if s == TRANSACTION_TYPE_INCOME => Ok(TransactionType::Income),
            s if s == TRANSACTION_TYPE_DEPOSIT => Ok(TransactionType::Deposit),
            s if s == TRANSACTION_TYPE_WITHDRAW => Ok(TransactionType::Withdraw),
            s if s == TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            s if s == TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            s if s == TRANSACTION_TYPE_DIVIDEND => Ok(TransactionType::Dividend),
            s if s == TRANSACTION_TYPE_FEE => Ok(TransactionType::Fee),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}
