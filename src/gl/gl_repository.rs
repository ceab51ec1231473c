use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::{gl_entries, gl_lines};

use super::gl_errors::{LedgerError, Result};
use super::gl_model::{GlEntry, GlEntryDB, GlLineDB, NewGlEntry};
use super::gl_traits::GlEntryRepositoryTrait;

/// Repository for ledger entries and their lines.
///
/// Entries are append-only: the only write after creation is the
/// soft-delete flip performed during supersession.
pub struct GlEntryRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl GlEntryRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn load_lines(
        conn: &mut SqliteConnection,
        entry_ids: &[String],
    ) -> Result<HashMap<String, Vec<GlLineDB>>> {
        let lines = gl_lines::table
            .filter(gl_lines::entry_id.eq_any(entry_ids))
            .select(GlLineDB::as_select())
            .load::<GlLineDB>(conn)?;

        let mut by_entry: HashMap<String, Vec<GlLineDB>> = HashMap::new();
        for line in lines {
            by_entry.entry(line.entry_id.clone()).or_default().push(line);
        }
        Ok(by_entry)
    }

    fn assemble(
        conn: &mut SqliteConnection,
        entries: Vec<GlEntryDB>,
    ) -> Result<Vec<GlEntry>> {
        let ids: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        let mut lines = Self::load_lines(conn, &ids)?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let entry_lines = lines.remove(&entry.id).unwrap_or_default();
                GlEntry::from_db(entry, entry_lines)
            })
            .collect())
    }
}

impl GlEntryRepositoryTrait for GlEntryRepository {
    /// Persists a validated entry with its lines.
    ///
    /// When the entry carries a transaction reference, every currently
    /// active entry for the same (owner, reference) pair is soft-deleted in
    /// the same database transaction as the insert, so a failed write leaves
    /// the previous entry untouched and a successful one leaves exactly one
    /// active entry.
    fn create_entry(&self, new_entry: NewGlEntry) -> Result<GlEntry> {
        new_entry.validate()?;

        let now = chrono::Utc::now().naive_utc();
        let entry_db = GlEntryDB {
            id: Uuid::new_v4().to_string(),
            user_id: new_entry.user_id,
            entry_date: new_entry.entry_date,
            memo: new_entry.memo,
            source: new_entry.source,
            ref_tx_id: new_entry.ref_tx_id,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
        };
        let lines_db: Vec<GlLineDB> = new_entry
            .lines
            .into_iter()
            .map(|line| GlLineDB {
                id: Uuid::new_v4().to_string(),
                entry_id: entry_db.id.clone(),
                gl_account_id: line.gl_account_id,
                side: line.side.as_str().to_string(),
                amount: line.amount.to_string(),
                currency: line.currency,
                note: line.note,
            })
            .collect();

        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        conn.transaction::<GlEntry, LedgerError, _>(|conn| {
            if let Some(ref_tx_id) = entry_db.ref_tx_id.as_deref() {
                diesel::update(
                    gl_entries::table
                        .filter(gl_entries::user_id.eq(&entry_db.user_id))
                        .filter(gl_entries::ref_tx_id.eq(ref_tx_id))
                        .filter(gl_entries::is_deleted.eq(false)),
                )
                .set((
                    gl_entries::is_deleted.eq(true),
                    gl_entries::deleted_at.eq(now),
                ))
                .execute(conn)?;
            }

            diesel::insert_into(gl_entries::table)
                .values(&entry_db)
                .execute(conn)?;

            diesel::insert_into(gl_lines::table)
                .values(&lines_db)
                .execute(conn)?;

            Ok(GlEntry::from_db(entry_db.clone(), lines_db.clone()))
        })
    }

    /// Retrieves one entry with its lines
    fn get_entry(&self, entry_id: &str) -> Result<GlEntry> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let entry = gl_entries::table
            .find(entry_id)
            .select(GlEntryDB::as_select())
            .first::<GlEntryDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    LedgerError::NotFound(format!("Ledger entry with id {} not found", entry_id))
                }
                _ => LedgerError::DatabaseError(e.to_string()),
            })?;

        let lines = Self::load_lines(&mut conn, std::slice::from_ref(&entry.id))?
            .remove(&entry.id)
            .unwrap_or_default();
        Ok(GlEntry::from_db(entry, lines))
    }

    /// Lists the owner's active entries, newest first
    fn list_active_by_user(&self, user_id: &str) -> Result<Vec<GlEntry>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let entries = gl_entries::table
            .filter(gl_entries::user_id.eq(user_id))
            .filter(gl_entries::is_deleted.eq(false))
            .order(gl_entries::entry_date.desc())
            .select(GlEntryDB::as_select())
            .load::<GlEntryDB>(&mut conn)?;

        Self::assemble(&mut conn, entries)
    }

    /// Lists the owner's active entries touching one ledger account,
    /// newest first
    fn list_active_by_account(&self, user_id: &str, gl_account_id: &str) -> Result<Vec<GlEntry>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let entry_ids: Vec<String> = gl_lines::table
            .filter(gl_lines::gl_account_id.eq(gl_account_id))
            .select(gl_lines::entry_id)
            .load::<String>(&mut conn)?;

        let entries = gl_entries::table
            .filter(gl_entries::user_id.eq(user_id))
            .filter(gl_entries::is_deleted.eq(false))
            .filter(gl_entries::id.eq_any(&entry_ids))
            .order(gl_entries::entry_date.desc())
            .select(GlEntryDB::as_select())
            .load::<GlEntryDB>(&mut conn)?;

        Self::assemble(&mut conn, entries)
    }

    /// Finds the single active entry for an (owner, transaction reference)
    /// pair, if any
    fn find_active_by_ref(&self, user_id: &str, ref_tx_id: &str) -> Result<Option<GlEntry>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| LedgerError::DatabaseError(e.to_string()))?;

        let entry = gl_entries::table
            .filter(gl_entries::user_id.eq(user_id))
            .filter(gl_entries::ref_tx_id.eq(ref_tx_id))
            .filter(gl_entries::is_deleted.eq(false))
            .select(GlEntryDB::as_select())
            .first::<GlEntryDB>(&mut conn)
            .optional()?;

        match entry {
            Some(entry) => {
                let lines = Self::load_lines(&mut conn, std::slice::from_ref(&entry.id))?
                    .remove(&entry.id)
                    .unwrap_or_default();
                Ok(Some(GlEntry::from_db(entry, lines)))
            }
            None => Ok(None),
        }
    }
}
