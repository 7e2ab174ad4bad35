// src/api/mod.rs
//! Notion API interaction: the ability to retrieve a page's block tree.
//!
//! Split the same way throughout: `client` does I/O, `parser` and
//! `responses` turn bodies into values, `fetcher` owns the deadline and
//! the boundary where failures become an absent page.

pub mod client;
pub mod fetcher;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::BlockTree;
use crate::types::PageId;
use std::time::Duration;
use tokio::time::Instant;

/// The point in time by which a page load must have finished.
///
/// Passed down into every request so in-flight work is bounded by the
/// same clock the caller is waiting on.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// A deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left, or `None` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    /// The error reported when `operation` ran into this deadline.
    pub fn exceeded(&self, operation: impl Into<String>) -> AppError {
        AppError::Timeout {
            operation: operation.into(),
            after: self.budget,
        }
    }
}

/// The ability to load a page's block tree from the content provider.
///
/// Business logic depends on this trait, never on HTTP details, and
/// receives an implementation explicitly rather than reaching for a
/// process-wide client.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn load_page(&self, id: &PageId, deadline: Deadline) -> Result<BlockTree, AppError>;
}

pub use client::NotionHttpClient;
pub use fetcher::PageFetcher;
