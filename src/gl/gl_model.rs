use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::gl_validation::validate_lines;
use super::gl_errors::{LedgerError, Result};

/// Entry line side constants
pub const ENTRY_SIDE_DEBIT: &str = "debit";
pub const ENTRY_SIDE_CREDIT: &str = "credit";

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

/// Side of a ledger line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    Debit,
    Credit,
}

impl EntrySide {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySide::Debit => ENTRY_SIDE_DEBIT,
            EntrySide::Credit => ENTRY_SIDE_CREDIT,
        }
    }
}

impl FromStr for EntrySide {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == ENTRY_SIDE_DEBIT => Ok(EntrySide::Debit),
            s if s == ENTRY_SIDE_CREDIT => Ok(EntrySide::Credit),
            _ => Err(format!("Unknown entry side: {}", s)),
        }
    }
}

/// One candidate leg of an entry, before persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInput {
    pub gl_account_id: String,
    pub side: EntrySide,
    pub amount: Decimal,
    pub currency: String,
    pub note: Option<String>,
}

impl LineInput {
    pub fn debit(gl_account_id: &str, amount: Decimal, currency: &str, note: &str) -> Self {
        Self {
            gl_account_id: gl_account_id.to_string(),
            side: EntrySide::Debit,
            amount,
            currency: currency.to_string(),
            note: Some(note.to_string()),
        }
    }

    pub fn credit(gl_account_id: &str, amount: Decimal, currency: &str, note: &str) -> Self {
        Self {
            gl_account_id: gl_account_id.to_string(),
            side: EntrySide::Credit,
            amount,
            currency: currency.to_string(),
            note: Some(note.to_string()),
        }
    }
}

/// Input model for writing a new ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGlEntry {
    pub user_id: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
    pub source: Option<String>,
    /// Reference back to the originating business transaction. Entries that
    /// carry one are superseded when the same reference is posted again.
    pub ref_tx_id: Option<String>,
    pub lines: Vec<LineInput>,
}

impl NewGlEntry {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(LedgerError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.lines.is_empty() {
            return Err(LedgerError::InvalidData(
                "An entry needs at least one line".to_string(),
            ));
        }
        validate_lines(&self.lines)
    }
}

/// Domain model representing one posting event with its lines.
///
/// Immutable once written; superseded entries get the soft-delete flag
/// flipped and are otherwise never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlEntry {
    pub id: String,
    pub user_id: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
    pub source: Option<String>,
    pub ref_tx_id: Option<String>,
    pub is_deleted: bool,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub lines: Vec<GlLine>,
}

/// Domain model for one persisted leg of an entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlLine {
    pub id: String,
    pub entry_id: String,
    pub gl_account_id: String,
    pub side: String,
    pub amount: Decimal,
    pub currency: String,
    pub note: Option<String>,
}

impl GlLine {
    pub fn is_debit(&self) -> bool {
        self.side == ENTRY_SIDE_DEBIT
    }
}

/// Database model for entry headers
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::gl_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GlEntryDB {
    pub id: String,
    pub user_id: String,
    pub entry_date: NaiveDateTime,
    pub memo: Option<String>,
    pub source: Option<String>,
    pub ref_tx_id: Option<String>,
    pub is_deleted: bool,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Database model for entry lines
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::gl_lines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GlLineDB {
    pub id: String,
    pub entry_id: String,
    pub gl_account_id: String,
    pub side: String,
    pub amount: String,
    pub currency: String,
    pub note: Option<String>,
}

impl From<GlLineDB> for GlLine {
    fn from(db: GlLineDB) -> Self {
        Self {
            id: db.id,
            entry_id: db.entry_id,
            gl_account_id: db.gl_account_id,
            side: db.side,
            amount: parse_decimal_string_tolerant(&db.amount, "amount"),
            currency: db.currency,
            note: db.note,
        }
    }
}

impl GlEntry {
    pub fn from_db(entry: GlEntryDB, lines: Vec<GlLineDB>) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            entry_date: entry.entry_date,
            memo: entry.memo,
            source: entry.source,
            ref_tx_id: entry.ref_tx_id,
            is_deleted: entry.is_deleted,
            deleted_at: entry.deleted_at,
            created_at: entry.created_at,
            lines: lines.into_iter().map(GlLine::from).collect(),
        }
    }
}
