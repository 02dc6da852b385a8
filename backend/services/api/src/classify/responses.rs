use copo_classifier::ClassificationResult;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub result: ClassificationResult,
    #[serde(rename = "savedId", skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<Uuid>,
}
