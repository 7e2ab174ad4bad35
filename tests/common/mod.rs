//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use notionfolio::{AppError, BlockTree, Deadline, PageId, PageSource, RecordMap};
use std::path::{Path, PathBuf};

pub const POST_META: &str = include_str!("../fixtures/postMeta.json");
pub const FIRST_CHUNK: &str = include_str!("../fixtures/load_page_chunk_first.json");
pub const LAST_CHUNK: &str = include_str!("../fixtures/load_page_chunk_last.json");

pub const PAGE_ID: &str = "550e8400e29b41d4a716446655440000";

/// Lays out `<dir>/data/postMeta.json` with `contents`, like an exported site.
pub fn public_dir_with(dir: &Path, contents: &str) -> PathBuf {
    let data = dir.join("data");
    std::fs::create_dir_all(&data).expect("create data dir");
    std::fs::write(data.join("postMeta.json"), contents).expect("write postMeta.json");
    dir.to_path_buf()
}

pub fn page_id() -> PageId {
    PageId::parse(PAGE_ID).expect("fixture page id is valid")
}

/// Page source that answers every page with a one-block tree, or fails.
pub struct StubPages {
    pub available: bool,
}

#[async_trait::async_trait]
impl PageSource for StubPages {
    async fn load_page(&self, id: &PageId, _deadline: Deadline) -> Result<BlockTree, AppError> {
        if !self.available {
            return Err(AppError::MalformedResponse("stub is down".to_string()));
        }
        let mut map = RecordMap::default();
        map.block
            .insert(id.to_dashed(), serde_json::json!({ "value": { "type": "page" } }));
        Ok(BlockTree::new(id.clone(), map))
    }
}
