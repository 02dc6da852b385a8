use chrono::{DateTime, Utc};
use copo_classifier::{ClassificationResult, KeywordHit, OrderedMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored projection of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub question: String,
    #[serde(rename = "bestCO")]
    pub best_co: Option<String>,
    pub pos: Vec<String>,
    pub score: i64,
    pub matched_keywords: OrderedMap<Vec<KeywordHit>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            question: result.question.clone(),
            best_co: result.best_co.clone(),
            pos: result.pos.clone(),
            score: result.best_score,
            matched_keywords: result.matched_keywords.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
