use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use std::sync::Arc;

use super::gl_errors::Result;
use super::gl_model::{GlEntry, LineInput, NewGlEntry};
use super::gl_traits::{GlEntryRepositoryTrait, GlEntryServiceTrait};

/// The entry writer.
///
/// Validates a candidate line set, then persists it as one atomic entry,
/// superseding any prior active entry tied to the same transaction
/// reference.
pub struct GlEntryService {
    repository: Arc<dyn GlEntryRepositoryTrait>,
}

impl GlEntryService {
    pub fn new(repository: Arc<dyn GlEntryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GlEntryServiceTrait for GlEntryService {
    async fn write_entry(
        &self,
        user_id: &str,
        entry_date: NaiveDateTime,
        memo: Option<String>,
        source: Option<String>,
        lines: Vec<LineInput>,
        ref_tx_id: Option<String>,
    ) -> Result<GlEntry> {
        debug!(
            "Writing ledger entry for {} source={:?} ref={:?} ({} lines)",
            user_id,
            source,
            ref_tx_id,
            lines.len()
        );

        let new_entry = NewGlEntry {
            user_id: user_id.to_string(),
            entry_date,
            memo,
            source,
            ref_tx_id,
            lines,
        };

        self.repository.create_entry(new_entry)
    }

    fn get_entry(&self, entry_id: &str) -> Result<GlEntry> {
        self.repository.get_entry(entry_id)
    }

    /// Lists the owner's active entries, optionally narrowed to entries
    /// touching one ledger account
    fn get_entries(&self, user_id: &str, gl_account_id: Option<&str>) -> Result<Vec<GlEntry>> {
        match gl_account_id {
            Some(gl_account_id) => self
                .repository
                .list_active_by_account(user_id, gl_account_id),
            None => self.repository.list_active_by_user(user_id),
        }
    }

    fn get_active_entry_by_ref(&self, user_id: &str, ref_tx_id: &str) -> Result<Option<GlEntry>> {
        self.repository.find_active_by_ref(user_id, ref_tx_id)
    }
}
