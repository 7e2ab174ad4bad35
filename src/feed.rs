// src/feed.rs
//! Best-available post list for rendering.
//!
//! A feed asks its primary source first and, when that fails, the static
//! fallback if one is configured. The outcome keeps "could not load" apart
//! from "loaded, nothing there" so the page can show an error message in
//! one case and a quiet empty state in the other.

use crate::constants::LOAD_POSTS_FAILED;
use crate::model::PostMeta;
use crate::store::PostSource;
use std::sync::Arc;

/// Outcome of asking a [`PostFeed`] for posts.
#[derive(Debug, Clone, PartialEq)]
pub enum PostListing {
    /// Posts were loaded. The list may be empty.
    Available(Vec<PostMeta>),
    /// No source could produce a list.
    Unavailable,
}

impl PostListing {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// Message to show in place of the list, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable => Some(LOAD_POSTS_FAILED),
        }
    }

    pub fn posts(&self) -> &[PostMeta] {
        match self {
            Self::Available(posts) => posts,
            Self::Unavailable => &[],
        }
    }

    pub fn into_option(self) -> Option<Vec<PostMeta>> {
        match self {
            Self::Available(posts) => Some(posts),
            Self::Unavailable => None,
        }
    }
}

/// Primary post source with an optional static fallback.
#[derive(Clone)]
pub struct PostFeed {
    primary: Arc<dyn PostSource>,
    fallback: Option<Arc<dyn PostSource>>,
}

impl PostFeed {
    pub fn new(primary: Arc<dyn PostSource>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn PostSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Resolves once: primary, then fallback, never retried.
    pub async fn best_available(&self) -> PostListing {
        let primary_error = match self.primary.load_posts().await {
            Ok(posts) => return PostListing::Available(posts),
            Err(e) => e,
        };
        log::error!(
            "Error fetching posts from {}: {}",
            self.primary.describe(),
            primary_error
        );

        let Some(fallback) = &self.fallback else {
            return PostListing::Unavailable;
        };

        match fallback.load_posts().await {
            Ok(posts) => {
                log::warn!(
                    "Serving {} posts from fallback {}",
                    posts.len(),
                    fallback.describe()
                );
                PostListing::Available(posts)
            }
            Err(e) => {
                log::error!(
                    "Fallback {} failed as well: {}",
                    fallback.describe(),
                    e
                );
                PostListing::Unavailable
            }
        }
    }
}
