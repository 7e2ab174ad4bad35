// src/api/fetcher.rs
//! The page fetch boundary: one attempt, one deadline, no error escapes.

use super::{Deadline, PageSource};
use crate::constants::PAGE_FETCH_TIMEOUT;
use crate::error::AppError;
use crate::model::BlockTree;
use crate::types::PageId;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};
use tokio::task::{JoinError, JoinHandle};

/// Fetches page block trees from a [`PageSource`] under a fixed timeout.
///
/// Every call is independent: no retries, no caching, no sharing of
/// in-flight requests between callers asking for the same page.
#[derive(Clone)]
pub struct PageFetcher {
    source: Arc<dyn PageSource>,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            timeout: PAGE_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches the block tree of `id`, or `None` if it could not be had
    /// within the timeout. Failures are logged here and go no further.
    pub async fn fetch_page_blocks(&self, id: &PageId) -> Option<BlockTree> {
        log::info!("Fetching blocks for page {}", id);
        let started = Instant::now();

        match self.try_fetch_page_blocks(id).await {
            Ok(tree) => {
                log::info!(
                    "Fetched page {} ({} blocks) in {}ms",
                    id,
                    tree.block_count(),
                    started.elapsed().as_millis()
                );
                Some(tree)
            }
            Err(e) if e.is_timeout() => {
                log::error!(
                    "Timed out fetching page {} after {}ms: {}",
                    id,
                    started.elapsed().as_millis(),
                    e
                );
                None
            }
            Err(AppError::NotionService { code, message, .. }) if code.is_not_found() => {
                log::warn!("Page {} not found or not public: {}", id, message);
                None
            }
            Err(e) => {
                log::error!(
                    "Failed to fetch page {} after {}ms: {}",
                    id,
                    started.elapsed().as_millis(),
                    e
                );
                None
            }
        }
    }

    /// Same as [`fetch_page_blocks`](Self::fetch_page_blocks) but hands the
    /// typed error back instead of logging it.
    ///
    /// The load runs on its own task under the deadline. When the deadline
    /// fires, or the caller stops waiting, the load future is dropped and its
    /// HTTP request aborted. A panicking source surfaces as an error rather
    /// than unwinding here.
    pub async fn try_fetch_page_blocks(&self, id: &PageId) -> Result<BlockTree, AppError> {
        let deadline = Deadline::after(self.timeout);
        let source = Arc::clone(&self.source);
        let page = id.clone();

        let task = AbortOnDrop(tokio::spawn(async move {
            match tokio::time::timeout_at(deadline.instant(), source.load_page(&page, deadline))
                .await
            {
                Ok(Ok(tree)) => Ok(tree),
                Ok(Err(e)) if !e.is_timeout() => Err(e),
                // Our deadline or the request's own timeout, reported alike.
                Ok(Err(_)) | Err(_) => Err(deadline.exceeded(format!("fetch of page {}", page))),
            }
        }));

        task.await.map_err(|join_error| AppError::InternalError {
            message: format!("page fetch task for {} failed", id),
            source: Some(Box::new(join_error)),
        })?
    }
}

/// Join handle that aborts its task when dropped unfinished.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
