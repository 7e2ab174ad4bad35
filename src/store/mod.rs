//! Post metadata store: the build-time `postMeta.json` read from disk or
//! fetched over HTTP.
//!
//! Each store offers two faces. [`PostSource::load_posts`] reports
//! failures as typed errors for callers that must tell "error" from "no
//! posts" (the feed, the API). The plain `read_posts`/`fetch_posts`
//! methods are the boundary: they log and hand back an empty list.

mod local;
mod remote;

pub use local::LocalPostStore;
pub use remote::RemotePostStore;

use crate::error::AppError;
use crate::model::PostMeta;

/// The ability to produce the site's post list.
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    async fn load_posts(&self) -> Result<Vec<PostMeta>, AppError>;

    /// Short name used in log lines.
    fn describe(&self) -> String;
}
