//! Domain model: post metadata records and page block trees.

mod block_tree;
pub mod listing;
mod post_meta;

pub use block_tree::{BlockTree, RecordMap};
pub use post_meta::PostMeta;
