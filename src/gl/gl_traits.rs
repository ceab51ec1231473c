use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::gl_errors::Result;
use super::gl_model::{GlEntry, LineInput, NewGlEntry};

/// Trait defining the contract for ledger entry repository operations.
pub trait GlEntryRepositoryTrait: Send + Sync {
    fn create_entry(&self, new_entry: NewGlEntry) -> Result<GlEntry>;
    fn get_entry(&self, entry_id: &str) -> Result<GlEntry>;
    fn list_active_by_user(&self, user_id: &str) -> Result<Vec<GlEntry>>;
    fn list_active_by_account(&self, user_id: &str, gl_account_id: &str) -> Result<Vec<GlEntry>>;
    fn find_active_by_ref(&self, user_id: &str, ref_tx_id: &str) -> Result<Option<GlEntry>>;
}

/// Trait defining the contract of the entry writer.
#[async_trait]
pub trait GlEntryServiceTrait: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn write_entry(
        &self,
        user_id: &str,
        entry_date: NaiveDateTime,
        memo: Option<String>,
        source: Option<String>,
        lines: Vec<LineInput>,
        ref_tx_id: Option<String>,
    ) -> Result<GlEntry>;
    fn get_entry(&self, entry_id: &str) -> Result<GlEntry>;
    fn get_entries(&self, user_id: &str, gl_account_id: Option<&str>) -> Result<Vec<GlEntry>>;
    fn get_active_entry_by_ref(&self, user_id: &str, ref_tx_id: &str) -> Result<Option<GlEntry>>;
}
