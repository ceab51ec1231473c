use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::accounts;

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::{Account, AccountDB, NewAccount};
use super::accounts_traits::AccountRepositoryTrait;

/// Repository for reading and seeding cash/brokerage accounts
pub struct AccountRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AccountRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Creates a new account (seeding/administration surface)
    fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let mut account_db: AccountDB = new_account.into();
        if account_db.id.is_empty() {
            account_db.id = uuid::Uuid::new_v4().to_string();
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        diesel::insert_into(accounts::table)
            .values(&account_db)
            .execute(&mut conn)?;

        Ok(account_db.into())
    }

    /// Retrieves an account by its ID
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts::table
            .find(account_id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .map(Account::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AccountError::NotFound(format!("Account with id {} not found", account_id))
                }
                _ => AccountError::DatabaseError(e.to_string()),
            })
    }

    /// Lists accounts belonging to a user, active first
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Account>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts::table
            .filter(accounts::user_id.eq(user_id))
            .order((accounts::is_active.desc(), accounts::name.asc()))
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .map(|results| results.into_iter().map(Account::from).collect())
            .map_err(AccountError::from)
    }
}
