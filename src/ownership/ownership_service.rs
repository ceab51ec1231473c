use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, DbConnection};
use crate::schema::{accounts, gl_accounts, gl_entries, transactions, users};

use super::ownership_errors::{OwnershipError, Result};
use super::ownership_traits::OwnershipGateTrait;

/// Service validating resource ownership for the posting engine.
///
/// Centralizes the owner-or-admin decision so callers never compare user ids
/// themselves.
pub struct OwnershipGate {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl OwnershipGate {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection> {
        get_connection(&self.pool).map_err(|e| OwnershipError::DatabaseError(e.to_string()))
    }

    fn caller_is_admin(conn: &mut DbConnection, caller_id: &str) -> Result<bool> {
        let is_admin = users::table
            .find(caller_id)
            .select(users::is_admin)
            .first::<bool>(conn)
            .optional()?;
        Ok(is_admin.unwrap_or(false))
    }

    fn check(
        conn: &mut DbConnection,
        owner_id: Option<String>,
        caller_id: &str,
        resource: &str,
    ) -> Result<()> {
        let owner_id = owner_id.ok_or_else(|| OwnershipError::NotFound(resource.to_string()))?;

        if owner_id == caller_id || Self::caller_is_admin(conn, caller_id)? {
            return Ok(());
        }

        Err(OwnershipError::Forbidden(format!(
            "No access to this {}",
            resource
        )))
    }
}

impl OwnershipGateTrait for OwnershipGate {
    /// Validates that a cash/brokerage account is accessible to the caller
    fn ensure_account_access(&self, account_id: &str, caller_id: &str) -> Result<()> {
        let mut conn = self.conn()?;

        let owner = accounts::table
            .find(account_id)
            .select(accounts::user_id)
            .first::<String>(&mut conn)
            .optional()?;

        Self::check(&mut conn, owner, caller_id, "account")
    }

    /// Validates that a ledger account is accessible to the caller
    fn ensure_gl_account_access(&self, gl_account_id: &str, caller_id: &str) -> Result<()> {
        let mut conn = self.conn()?;

        let owner = gl_accounts::table
            .find(gl_account_id)
            .select(gl_accounts::user_id)
            .first::<String>(&mut conn)
            .optional()?;

        Self::check(&mut conn, owner, caller_id, "ledger account")
    }

    /// Validates that a transaction is accessible to the caller (via its account)
    fn ensure_transaction_access(&self, transaction_id: &str, caller_id: &str) -> Result<()> {
        let mut conn = self.conn()?;

        let owner = transactions::table
            .inner_join(accounts::table.on(accounts::id.eq(transactions::account_id)))
            .filter(transactions::id.eq(transaction_id))
            .select(accounts::user_id)
            .first::<String>(&mut conn)
            .optional()?;

        Self::check(&mut conn, owner, caller_id, "transaction")
    }

    /// Validates that a ledger entry is accessible to the caller
    fn ensure_gl_entry_access(&self, gl_entry_id: &str, caller_id: &str) -> Result<()> {
        let mut conn = self.conn()?;

        let owner = gl_entries::table
            .find(gl_entry_id)
            .select(gl_entries::user_id)
            .first::<String>(&mut conn)
            .optional()?;

        Self::check(&mut conn, owner, caller_id, "ledger entry")
    }

    fn account_exists(&self, account_id: &str) -> Result<bool> {
        let mut conn = self.conn()?;

        let found = accounts::table
            .find(account_id)
            .select(accounts::id)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(found.is_some())
    }

    fn user_exists(&self, user_id: &str) -> Result<bool> {
        let mut conn = self.conn()?;

        let found = users::table
            .find(user_id)
            .select(users::id)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(found.is_some())
    }
}
