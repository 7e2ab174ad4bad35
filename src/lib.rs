// src/lib.rs
//! notionfolio library: the data layer of a Notion-backed blog.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `SiteConfig`, `Task`
//! - **Domain model**: `PostMeta`, `BlockTree`, `RecordMap`, listing queries
//! - **Content fetching**: `PageSource`, `NotionHttpClient`, `PageFetcher`, `Deadline`
//! - **Post metadata**: `PostSource`, `LocalPostStore`, `RemotePostStore`
//! - **Aggregation**: `PostFeed`, `PostListing`
//! - **HTTP**: `router`, `serve`, `AppState`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod feed;
pub mod model;
pub mod output;
pub mod server;
pub mod store;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig, Task};

// --- Domain Model ---
pub use crate::model::{listing, BlockTree, PostMeta, RecordMap};

// --- Domain Types ---
pub use crate::types::{AuthToken, PageId, ValidatedUrl};

// --- Content Fetching ---
pub use crate::api::{Deadline, NotionHttpClient, PageFetcher, PageSource};

// --- Post Metadata ---
pub use crate::store::{LocalPostStore, PostSource, RemotePostStore};

// --- Aggregation ---
pub use crate::feed::{PostFeed, PostListing};

// --- HTTP ---
pub use crate::server::{router, serve, AppState};
