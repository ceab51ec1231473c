use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::gl_accounts;

use super::gl_accounts_constants::{GL_ACCOUNT_KIND_ASSET, ROLE_INVESTMENT_BUCKET};
use super::gl_accounts_errors::{GlAccountError, Result};
use super::gl_accounts_model::{GlAccount, GlAccountDB, NewGlAccount};
use super::gl_accounts_traits::GlAccountRepositoryTrait;

/// Repository for ledger account lookups.
///
/// Everything here is read-only from the posting engine's perspective;
/// `create` exists for seeding and administration.
pub struct GlAccountRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl GlAccountRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl GlAccountRepositoryTrait for GlAccountRepository {
    /// Creates a new ledger account (seeding/administration surface)
    fn create(&self, new_gl_account: NewGlAccount) -> Result<GlAccount> {
        new_gl_account.validate()?;

        let mut gl_account_db: GlAccountDB = new_gl_account.into();
        if gl_account_db.id.is_empty() {
            gl_account_db.id = Uuid::new_v4().to_string();
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        diesel::insert_into(gl_accounts::table)
            .values(&gl_account_db)
            .execute(&mut conn)?;

        Ok(gl_account_db.into())
    }

    /// Retrieves a ledger account by its ID
    fn get_by_id(&self, gl_account_id: &str) -> Result<GlAccount> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .find(gl_account_id)
            .select(GlAccountDB::as_select())
            .first::<GlAccountDB>(&mut conn)
            .map(GlAccount::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => GlAccountError::NotFound(format!(
                    "Ledger account with id {} not found",
                    gl_account_id
                )),
                _ => GlAccountError::DatabaseError(e.to_string()),
            })
    }

    /// Finds the ledger account linked to an external cash/brokerage account
    fn find_by_linked_account(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Option<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .filter(gl_accounts::linked_account_id.eq(account_id))
            .select(GlAccountDB::as_select())
            .first::<GlAccountDB>(&mut conn)
            .optional()
            .map(|found| found.map(GlAccount::from))
            .map_err(GlAccountError::from)
    }

    /// Finds the owner's ledger account configured for a fixed role
    fn find_by_role(&self, user_id: &str, role: &str) -> Result<Option<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .filter(gl_accounts::role.eq(role))
            .select(GlAccountDB::as_select())
            .first::<GlAccountDB>(&mut conn)
            .optional()
            .map(|found| found.map(GlAccount::from))
            .map_err(GlAccountError::from)
    }

    /// Finds the owner's investment bucket for a currency (asset kind only)
    fn find_investment_bucket(&self, user_id: &str, currency: &str) -> Result<Option<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .filter(gl_accounts::role.eq(ROLE_INVESTMENT_BUCKET))
            .filter(gl_accounts::kind.eq(GL_ACCOUNT_KIND_ASSET))
            .filter(gl_accounts::currency.eq(currency))
            .select(GlAccountDB::as_select())
            .first::<GlAccountDB>(&mut conn)
            .optional()
            .map(|found| found.map(GlAccount::from))
            .map_err(GlAccountError::from)
    }

    /// Finds a ledger account by name fragment, scoped to the owner
    fn find_name_contains(&self, user_id: &str, fragment: &str) -> Result<Option<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .filter(gl_accounts::name.like(format!("%{}%", fragment)))
            .select(GlAccountDB::as_select())
            .first::<GlAccountDB>(&mut conn)
            .optional()
            .map(|found| found.map(GlAccount::from))
            .map_err(GlAccountError::from)
    }

    /// Lists the owner's ledger accounts of one kind
    fn list_by_kind(&self, user_id: &str, kind: &str) -> Result<Vec<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .filter(gl_accounts::kind.eq(kind))
            .order(gl_accounts::name.asc())
            .select(GlAccountDB::as_select())
            .load::<GlAccountDB>(&mut conn)
            .map(|results| results.into_iter().map(GlAccount::from).collect())
            .map_err(GlAccountError::from)
    }

    /// Lists all of the owner's ledger accounts
    fn list_by_user(&self, user_id: &str) -> Result<Vec<GlAccount>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GlAccountError::DatabaseError(e.to_string()))?;

        gl_accounts::table
            .filter(gl_accounts::user_id.eq(user_id))
            .order(gl_accounts::name.asc())
            .select(GlAccountDB::as_select())
            .load::<GlAccountDB>(&mut conn)
            .map(|results| results.into_iter().map(GlAccount::from).collect())
            .map_err(GlAccountError::from)
    }
}
