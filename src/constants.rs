// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you how the data
//! layer behaves: how long it waits on Notion, where post metadata lives,
//! and what a failed load looks like to a reader of the site.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion content provider
// ---------------------------------------------------------------------------

/// Default base URL of Notion's unofficial v3 API.
pub const NOTION_API_BASE_URL: &str = "https://www.notion.so/api/v3";

/// How long a single page fetch may take before it is abandoned.
///
/// The deadline covers every chunk request of the page, not each one.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// How many records `loadPageChunk` is asked for per chunk.
pub const PAGE_CHUNK_LIMIT: u32 = 100;

/// Upper bound on chunks followed for one page.
///
/// Notion keeps handing out cursors for very large pages. The deadline
/// bounds time, this bounds work.
pub const PAGE_MAX_CHUNKS: u32 = 20;

// ---------------------------------------------------------------------------
// Post metadata
// ---------------------------------------------------------------------------

/// Directory holding the statically exported site assets.
pub const PUBLIC_DIR: &str = "public";

/// Location of the post metadata file, relative to the public directory.
pub const POST_META_RELATIVE_PATH: &str = "data/postMeta.json";

/// Route under which the post metadata file is served as a static asset.
pub const POST_META_ROUTE: &str = "/data/postMeta.json";

/// Route of the post listing API.
pub const POSTS_API_ROUTE: &str = "/api/posts";

// ---------------------------------------------------------------------------
// User-facing failure messages
// ---------------------------------------------------------------------------

/// Shown (and returned by the API) when the post list could not be loaded.
pub const LOAD_POSTS_FAILED: &str = "Failed to load posts";

/// Returned by the API when a page's block tree could not be loaded.
pub const LOAD_PAGE_FAILED: &str = "Failed to load page";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
