use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use crate::accounts::AccountRepositoryTrait;
use crate::gl::{GlEntry, GlEntryServiceTrait, LineInput};
use crate::gl_accounts::{AccountRole, GlAccountDirectoryTrait};
use crate::ownership::OwnershipGateTrait;
use crate::transactions::{Transaction, TransactionType};

use super::postings_constants::*;
use super::postings_errors::{PostingError, Result};
use super::postings_model::{ExpenseCommand, IncomeCommand, TransferCommand};
use super::postings_traits::{CostBasisSourceTrait, PostingServiceTrait};

/// Default cost basis source: trusts the `cost` value carried on the
/// transaction, falling back to zero when absent. Unverified against
/// holdings (v1 approximation).
pub struct CallerSuppliedCostBasis;

impl CostBasisSourceTrait for CallerSuppliedCostBasis {
    fn disposal_cost(&self, transaction: &Transaction) -> Result<Decimal> {
        Ok(transaction.cost.unwrap_or(Decimal::ZERO))
    }
}

/// The transaction-to-ledger mapper.
///
/// Stateless: each call builds one validated line set from its input and the
/// account directory, then hands it to the entry writer. Errors abort before
/// anything is persisted.
pub struct PostingService {
    directory: Arc<dyn GlAccountDirectoryTrait>,
    entry_service: Arc<dyn GlEntryServiceTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    ownership: Arc<dyn OwnershipGateTrait>,
    cost_basis: Arc<dyn CostBasisSourceTrait>,
}

impl PostingService {
    pub fn new(
        directory: Arc<dyn GlAccountDirectoryTrait>,
        entry_service: Arc<dyn GlEntryServiceTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        ownership: Arc<dyn OwnershipGateTrait>,
        cost_basis: Arc<dyn CostBasisSourceTrait>,
    ) -> Self {
        Self {
            directory,
            entry_service,
            account_repository,
            ownership,
            cost_basis,
        }
    }

    /// Builds the line set and source tag for one automatically posted
    /// transaction type.
    fn build_transaction_lines(
        &self,
        user_id: &str,
        transaction: &Transaction,
        transaction_type: TransactionType,
        cash_gl_account_id: &str,
        currency: &str,
    ) -> Result<(Vec<LineInput>, &'static str)> {
        let amount = transaction.amount.unwrap_or(Decimal::ZERO);
        let quantity = transaction.quantity.unwrap_or(Decimal::ZERO);
        let price = transaction.price.unwrap_or(Decimal::ZERO);
        let fee = transaction.fee.unwrap_or(Decimal::ZERO);

        match transaction_type {
            TransactionType::Deposit => {
                let equity = self.directory.resolve(user_id, &AccountRole::Equity)?;
                let lines = vec![
                    LineInput::debit(cash_gl_account_id, amount, currency, "deposit in"),
                    LineInput::credit(&equity.id, amount, currency, "owner contribution"),
                ];
                Ok((lines, SOURCE_AUTO_DEPOSIT))
            }
            TransactionType::Withdraw => {
                let equity = self.directory.resolve(user_id, &AccountRole::Equity)?;
                let lines = vec![
                    LineInput::debit(&equity.id, amount, currency, "owner draw"),
                    LineInput::credit(cash_gl_account_id, amount, currency, "withdraw out"),
                ];
                Ok((lines, SOURCE_AUTO_WITHDRAW))
            }
            TransactionType::Buy => {
                let bucket = self
                    .directory
                    .resolve(user_id, &AccountRole::InvestmentBucket(currency.to_string()))?;
                // Fee is folded into cost basis rather than booked separately.
                let total = transaction.amount.unwrap_or(quantity * price + fee);
                let lines = vec![
                    LineInput::debit(&bucket.id, total, currency, "buy cost (incl. fee)"),
                    LineInput::credit(cash_gl_account_id, total, currency, "cash out"),
                ];
                Ok((lines, SOURCE_AUTO_BUY))
            }
            TransactionType::Sell => {
                let bucket = self
                    .directory
                    .resolve(user_id, &AccountRole::InvestmentBucket(currency.to_string()))?;
                let proceeds = transaction.amount.unwrap_or(quantity * price - fee);
                let cost = self.cost_basis.disposal_cost(transaction)?;

                let mut lines = vec![
                    LineInput::debit(cash_gl_account_id, proceeds, currency, "cash in"),
                    LineInput::credit(&bucket.id, cost, currency, "reduce cost basis"),
                ];

                // proceeds = cost + pnl keeps the entry balanced while
                // separating capital return from P&L recognition.
                let pnl = proceeds - cost;
                if pnl > Decimal::ZERO {
                    let gain = self
                        .directory
                        .resolve(user_id, &AccountRole::RealizedGainIncome)?;
                    lines.push(LineInput::credit(&gain.id, pnl, currency, "realized gain"));
                } else if pnl < Decimal::ZERO {
                    let loss = self
                        .directory
                        .resolve(user_id, &AccountRole::RealizedLossExpense)?;
                    lines.push(LineInput::debit(&loss.id, -pnl, currency, "realized loss"));
                }
                Ok((lines, SOURCE_AUTO_SELL))
            }
            TransactionType::Dividend => {
                let dividend = self
                    .directory
                    .resolve(user_id, &AccountRole::DividendIncome)?;
                let lines = vec![
                    LineInput::debit(cash_gl_account_id, amount, currency, "dividend in"),
                    LineInput::credit(&dividend.id, amount, currency, "dividend income"),
                ];
                Ok((lines, SOURCE_AUTO_DIVIDEND))
            }
            TransactionType::Fee => {
                let fee_expense = self.directory.resolve(user_id, &AccountRole::FeeExpense)?;
                let amt = transaction.amount.or(transaction.fee).unwrap_or(Decimal::ZERO);
                let lines = vec![
                    LineInput::debit(&fee_expense.id, amt, currency, "fee expense"),
                    LineInput::credit(cash_gl_account_id, amt, currency, "cash out"),
                ];
                Ok((lines, SOURCE_AUTO_FEE))
            }
            TransactionType::Transfer | TransactionType::Expense | TransactionType::Income => {
                Err(PostingError::UnsupportedTransactionType(
                    transaction_type.as_str().to_string(),
                ))
            }
        }
    }
}

#[async_trait]
impl PostingServiceTrait for PostingService {
    /// Manual transfer between two of the caller's ledger accounts
    async fn post_transfer(&self, user_id: &str, command: TransferCommand) -> Result<GlEntry> {
        command.validate()?;

        self.ownership
            .ensure_gl_account_access(&command.from_gl_account_id, user_id)?;
        self.ownership
            .ensure_gl_account_access(&command.to_gl_account_id, user_id)?;

        let lines = vec![
            LineInput::debit(
                &command.to_gl_account_id,
                command.amount,
                &command.currency,
                "transfer in",
            ),
            LineInput::credit(
                &command.from_gl_account_id,
                command.amount,
                &command.currency,
                "transfer out",
            ),
        ];

        Ok(self
            .entry_service
            .write_entry(
                user_id,
                command.entry_date,
                command.memo,
                Some(SOURCE_MANUAL_TRANSFER.to_string()),
                lines,
                None,
            )
            .await?)
    }

    /// Manual expense paid from a cash ledger account
    async fn post_expense(&self, user_id: &str, command: ExpenseCommand) -> Result<GlEntry> {
        command.validate()?;

        self.ownership
            .ensure_gl_account_access(&command.pay_from_gl_account_id, user_id)?;
        self.ownership
            .ensure_gl_account_access(&command.expense_gl_account_id, user_id)?;

        let lines = vec![
            LineInput::debit(
                &command.expense_gl_account_id,
                command.amount,
                &command.currency,
                "expense",
            ),
            LineInput::credit(
                &command.pay_from_gl_account_id,
                command.amount,
                &command.currency,
                "cash/bank out",
            ),
        ];

        Ok(self
            .entry_service
            .write_entry(
                user_id,
                command.entry_date,
                command.memo,
                Some(SOURCE_MANUAL_EXPENSE.to_string()),
                lines,
                None,
            )
            .await?)
    }

    /// Manual income received into a cash ledger account
    async fn post_income(&self, user_id: &str, command: IncomeCommand) -> Result<GlEntry> {
        command.validate()?;

        self.ownership
            .ensure_gl_account_access(&command.receive_to_gl_account_id, user_id)?;
        self.ownership
            .ensure_gl_account_access(&command.income_gl_account_id, user_id)?;

        let lines = vec![
            LineInput::debit(
                &command.receive_to_gl_account_id,
                command.amount,
                &command.currency,
                "cash/bank in",
            ),
            LineInput::credit(
                &command.income_gl_account_id,
                command.amount,
                &command.currency,
                "income",
            ),
        ];

        Ok(self
            .entry_service
            .write_entry(
                user_id,
                command.entry_date,
                command.memo,
                Some(SOURCE_MANUAL_INCOME.to_string()),
                lines,
                None,
            )
            .await?)
    }

    /// Books one business transaction into the ledger.
    ///
    /// The entry carries the transaction id as its reference, so re-posting
    /// after a retry or edit supersedes the previous entry instead of
    /// duplicating it.
    async fn post_transaction(&self, user_id: &str, transaction: &Transaction) -> Result<GlEntry> {
        self.ownership
            .ensure_account_access(&transaction.account_id, user_id)?;

        let transaction_type = TransactionType::from_str(&transaction.transaction_type)
            .map_err(|_| {
                PostingError::UnsupportedTransactionType(transaction.transaction_type.clone())
            })?;

        // The cash account's currency governs the whole posting (v1 rule).
        let account = self.account_repository.get_by_id(&transaction.account_id)?;
        let currency = account.currency.as_str();

        let cash = self.directory.resolve(
            user_id,
            &AccountRole::LinkedCash(transaction.account_id.clone()),
        )?;

        let (lines, source) = self.build_transaction_lines(
            user_id,
            transaction,
            transaction_type,
            &cash.id,
            currency,
        )?;

        debug!(
            "Posting {} transaction {} for {}",
            transaction_type.as_str(),
            transaction.id,
            user_id
        );

        Ok(self
            .entry_service
            .write_entry(
                user_id,
                transaction.trade_time,
                transaction.note.clone(),
                Some(source.to_string()),
                lines,
                Some(transaction.id.clone()),
            )
            .await?)
    }
}
