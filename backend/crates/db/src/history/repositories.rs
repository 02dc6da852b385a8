use async_trait::async_trait;
use uuid::Uuid;

use crate::history::models::HistoryEntry;
use copo_common::error::CopoResult;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn save(&self, entry: HistoryEntry) -> CopoResult<HistoryEntry>;
    async fn get(&self, id: Uuid) -> CopoResult<Option<HistoryEntry>>;
    /// Newest first, at most `limit` entries.
    async fn list(&self, limit: i64) -> CopoResult<Vec<HistoryEntry>>;
    /// Remove every entry, returning how many were deleted.
    async fn clear(&self) -> CopoResult<u64>;
}
