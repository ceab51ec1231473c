use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::transactions;

use super::transactions_errors::{Result, TransactionError};
use super::transactions_model::{NewTransaction, Transaction, TransactionDB};
use super::transactions_traits::TransactionRepositoryTrait;

/// Repository for reading and seeding business transactions
pub struct TransactionRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    /// Creates a new transaction (CRUD/seeding surface)
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let mut tx_db: TransactionDB = new_transaction.into();
        if tx_db.id.is_empty() {
            tx_db.id = Uuid::new_v4().to_string();
        }

        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        diesel::insert_into(transactions::table)
            .values(&tx_db)
            .execute(&mut conn)?;

        Ok(tx_db.into())
    }

    /// Retrieves a transaction by its ID
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        transactions::table
            .find(transaction_id)
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .map(Transaction::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => TransactionError::NotFound(format!(
                    "Transaction with id {} not found",
                    transaction_id
                )),
                _ => TransactionError::DatabaseError(e.to_string()),
            })
    }

    /// Retrieves transactions by account ID, oldest first
    fn get_by_account_id(&self, account_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        transactions::table
            .filter(transactions::account_id.eq(account_id))
            .order(transactions::trade_time.asc())
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map(|results| results.into_iter().map(Transaction::from).collect())
            .map_err(TransactionError::from)
    }
}
