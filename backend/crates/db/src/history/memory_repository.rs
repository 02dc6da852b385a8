use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::history::models::HistoryEntry;
use crate::history::repositories::HistoryRepository;
use copo_common::error::CopoResult;

/// Process-local history used when no database is configured. Lost on restart.
///
/// Holds at most `capacity` entries; saving past that drops the oldest save.
#[derive(Clone)]
pub struct MemoryHistoryRepository {
    entries: Arc<RwLock<VecDeque<HistoryEntry>>>,
    capacity: usize,
}

impl MemoryHistoryRepository {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }
}

#[async_trait]
impl HistoryRepository for MemoryHistoryRepository {
    async fn save(&self, entry: HistoryEntry) -> CopoResult<HistoryEntry> {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry.clone());
        Ok(entry)
    }

    async fn get(&self, id: Uuid) -> CopoResult<Option<HistoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self, limit: i64) -> CopoResult<Vec<HistoryEntry>> {
        let mut entries: Vec<HistoryEntry> = self.entries.read().await.iter().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(entries)
    }

    async fn clear(&self) -> CopoResult<u64> {
        let mut entries = self.entries.write().await;
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }
}
