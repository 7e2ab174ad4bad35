use crate::types::PageId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Notion's record map: tables of records keyed by record id.
///
/// Only the `block` table is named; `collection`, `collection_view`,
/// `notion_user`, `signed_urls` and whatever else the provider returns
/// are carried as opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMap {
    #[serde(default)]
    pub block: IndexMap<String, Value>,
    #[serde(flatten)]
    pub tables: IndexMap<String, Value>,
}

impl RecordMap {
    /// Folds a later chunk into this map. Records from `other` win.
    pub fn merge(&mut self, other: RecordMap) {
        self.block.extend(other.block);
        for (name, table) in other.tables {
            match (self.tables.get_mut(&name), table) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    existing.extend(incoming);
                }
                (_, table) => {
                    self.tables.insert(name, table);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty() && self.tables.is_empty()
    }
}

/// The full block tree of one page, as fetched from the content provider.
///
/// Treated as opaque by this crate: it is fetched, handed to the caller
/// and dropped. Nothing keeps it between requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTree {
    root: PageId,
    record_map: RecordMap,
}

impl BlockTree {
    pub fn new(root: PageId, record_map: RecordMap) -> Self {
        Self { root, record_map }
    }

    pub fn root(&self) -> &PageId {
        &self.root
    }

    pub fn block_count(&self) -> usize {
        self.record_map.block.len()
    }

    /// Looks a block up by id, dashed or not.
    pub fn contains_block(&self, id: &str) -> bool {
        if self.record_map.block.contains_key(id) {
            return true;
        }
        PageId::parse(id)
            .map(|parsed| self.record_map.block.contains_key(&parsed.to_dashed()))
            .unwrap_or(false)
    }

    /// The record of the page block itself, if the provider returned it.
    pub fn root_block(&self) -> Option<&Value> {
        self.record_map.block.get(&self.root.to_dashed())
    }

    pub fn record_map(&self) -> &RecordMap {
        &self.record_map
    }

    pub fn into_record_map(self) -> RecordMap {
        self.record_map
    }
}
