//! Wire shapes of the v3 `loadPageChunk` endpoint.

use crate::model::RecordMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPageChunkRequest {
    pub page_id: String,
    pub limit: u32,
    pub cursor: ChunkCursor,
    pub chunk_number: u32,
    pub vertical_columns: bool,
}

/// Position in a page's block list. An empty stack means the page is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkCursor {
    #[serde(default)]
    pub stack: Vec<Value>,
}

impl ChunkCursor {
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPageChunkResponse {
    #[serde(default)]
    pub record_map: RecordMap,
    #[serde(default)]
    pub cursor: ChunkCursor,
}

/// Error body of the v3 API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionErrorBody {
    #[serde(default)]
    pub error_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub message: String,
}
