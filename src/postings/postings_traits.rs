use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::gl::GlEntry;
use crate::transactions::Transaction;

use super::postings_errors::Result;
use super::postings_model::{ExpenseCommand, IncomeCommand, TransferCommand};

/// Trait defining the contract of the posting service.
#[async_trait]
pub trait PostingServiceTrait: Send + Sync {
    async fn post_transfer(&self, user_id: &str, command: TransferCommand) -> Result<GlEntry>;
    async fn post_expense(&self, user_id: &str, command: ExpenseCommand) -> Result<GlEntry>;
    async fn post_income(&self, user_id: &str, command: IncomeCommand) -> Result<GlEntry>;
    async fn post_transaction(&self, user_id: &str, transaction: &Transaction) -> Result<GlEntry>;
}

/// Source of the disposed cost basis used when booking a sell.
///
/// The default implementation trusts the value carried on the transaction;
/// a position/lot tracker can be injected instead without touching the
/// mapper.
pub trait CostBasisSourceTrait: Send + Sync {
    fn disposal_cost(&self, transaction: &Transaction) -> Result<Decimal>;
}
