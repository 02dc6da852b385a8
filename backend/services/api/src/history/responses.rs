use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub ok: bool,
    pub deleted: u64,
}
