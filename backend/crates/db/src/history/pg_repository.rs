use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::history::models::HistoryEntry;
use crate::history::repositories::HistoryRepository;
use copo_common::error::{CopoError, CopoResult};

// Matched keywords are stored as JSON text so CO order survives the round trip.
const CREATE_TABLE: &str = "create table if not exists classification_history (
  id uuid primary key,
  question text not null,
  best_co text,
  pos text[] not null default '{}',
  score bigint not null,
  matched_keywords text not null default '{}',
  created_at timestamptz not null default now(),
  updated_at timestamptz not null default now()
)";

const CREATE_INDEX: &str = "create index if not exists classification_history_created_idx
  on classification_history(created_at desc)";

const COLUMNS: &str =
    "id, question, best_co, pos, score, matched_keywords, created_at, updated_at";

#[derive(Clone)]
pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the history table and its index if they do not exist yet.
    pub async fn ensure_schema(&self) -> CopoResult<()> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| CopoError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

fn map_entry_row(row: &sqlx::postgres::PgRow) -> CopoResult<HistoryEntry> {
    let matched_raw: String = row.get("matched_keywords");
    let matched_keywords = serde_json::from_str(&matched_raw)
        .map_err(|e| CopoError::Internal(format!("corrupt matched_keywords: {e}")))?;

    Ok(HistoryEntry {
        id: row.get("id"),
        question: row.get("question"),
        best_co: row.get("best_co"),
        pos: row.get("pos"),
        score: row.get("score"),
        matched_keywords,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn save(&self, entry: HistoryEntry) -> CopoResult<HistoryEntry> {
        let matched_json = serde_json::to_string(&entry.matched_keywords)
            .map_err(|e| CopoError::Internal(e.to_string()))?;

        let row = sqlx::query(&format!(
            "insert into classification_history
             (id, question, best_co, pos, score, matched_keywords, created_at, updated_at)
             values ($1, $2, $3, $4, $5, $6, $7, $8)
             returning {COLUMNS}"
        ))
        .bind(entry.id)
        .bind(&entry.question)
        .bind(&entry.best_co)
        .bind(&entry.pos)
        .bind(entry.score)
        .bind(&matched_json)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CopoError::Database(e.to_string()))?;

        map_entry_row(&row)
    }

    async fn get(&self, id: Uuid) -> CopoResult<Option<HistoryEntry>> {
        let row = sqlx::query(&format!(
            "select {COLUMNS} from classification_history where id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CopoError::Database(e.to_string()))?;

        row.as_ref().map(map_entry_row).transpose()
    }

    async fn list(&self, limit: i64) -> CopoResult<Vec<HistoryEntry>> {
        let rows = sqlx::query(&format!(
            "select {COLUMNS} from classification_history
             order by created_at desc
             limit $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CopoError::Database(e.to_string()))?;

        rows.iter().map(map_entry_row).collect()
    }

    async fn clear(&self) -> CopoResult<u64> {
        let result = sqlx::query("delete from classification_history")
            .execute(&self.pool)
            .await
            .map_err(|e| CopoError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pool;
    use chrono::{Duration, Utc};
    use copo_classifier::classify_from_text;

    async fn test_repo() -> Option<PgHistoryRepository> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url).await.expect("db should connect");
        let repo = PgHistoryRepository::new(pool);
        repo.ensure_schema().await.expect("create schema");
        Some(repo)
    }

    fn make_entry(question: &str) -> HistoryEntry {
        let result = classify_from_text(
            question,
            "CO1: loop, variable\nCO2: stack, linked list",
            "CO1: PO1, PO2\nCO2: PO2, PO3",
        );
        HistoryEntry::from_result(&result)
    }

    #[tokio::test]
    async fn save_and_get_entry() {
        let repo = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let entry = make_entry("Push onto a stack backed by a linked list");
        let id = entry.id;

        let saved = repo.save(entry.clone()).await.expect("save");
        assert_eq!(saved.id, id);
        assert_eq!(saved.best_co.as_deref(), Some("CO2"));
        assert_eq!(saved.pos, vec!["PO2", "PO3"]);
        assert_eq!(saved.score, 2);

        let fetched = repo.get(id).await.expect("get").expect("entry exists");
        assert_eq!(fetched.question, entry.question);
        let keys: Vec<&str> = fetched.matched_keywords.keys().collect();
        assert_eq!(keys, vec!["CO1", "CO2"]);
        assert_eq!(fetched.matched_keywords.get("CO2").map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let repo = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let result = repo.get(Uuid::new_v4()).await.expect("get");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_entry_without_best_co() {
        let repo = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let saved = repo.save(make_entry("")).await.expect("save");
        assert!(saved.best_co.is_none());
        assert!(saved.pos.is_empty());
        assert_eq!(saved.score, 0);
    }

    #[tokio::test]
    async fn corrupt_matched_keywords_is_an_error() {
        let repo = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let id = Uuid::new_v4();
        sqlx::query(
            "insert into classification_history (id, question, score, matched_keywords)
             values ($1, 'broken', 0, 'not json')",
        )
        .bind(id)
        .execute(&repo.pool)
        .await
        .expect("insert raw row");

        let result = repo.get(id).await;

        sqlx::query("delete from classification_history where id = $1")
            .bind(id)
            .execute(&repo.pool)
            .await
            .expect("remove raw row");

        assert!(matches!(result, Err(CopoError::Internal(msg)) if msg.contains("matched_keywords")));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_limited() {
        let repo = match test_repo().await {
            Some(r) => r,
            None => return,
        };
        let base = Utc::now() + Duration::days(365);
        let mut ids = Vec::new();
        for offset in 0..3 {
            let mut entry = make_entry("loop over a variable");
            entry.created_at = base + Duration::seconds(offset);
            entry.updated_at = entry.created_at;
            ids.push(entry.id);
            repo.save(entry).await.expect("save");
        }

        let listed = repo.list(2).await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, ids[2]);
        assert_eq!(listed[1].id, ids[1]);
    }
}
