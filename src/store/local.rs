use super::PostSource;
use crate::constants::{POST_META_RELATIVE_PATH, PUBLIC_DIR};
use crate::error::AppError;
use crate::model::PostMeta;
use std::path::{Path, PathBuf};

/// Reads post metadata from the exported site on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalPostStore {
    path: PathBuf,
}

impl Default for LocalPostStore {
    fn default() -> Self {
        Self::in_public_dir(PUBLIC_DIR)
    }
}

impl LocalPostStore {
    /// Store reading `<public_dir>/data/postMeta.json`.
    pub fn in_public_dir(public_dir: impl AsRef<Path>) -> Self {
        Self {
            path: public_dir.as_ref().join(POST_META_RELATIVE_PATH),
        }
    }

    /// Store reading exactly `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the posts in file order. A missing or malformed file is
    /// logged and yields an empty list.
    pub async fn read_posts(&self) -> Vec<PostMeta> {
        match self.load_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                log::error!("Error reading post metadata: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl PostSource for LocalPostStore {
    async fn load_posts(&self) -> Result<Vec<PostMeta>, AppError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| AppError::FileRead {
                path: self.path.clone(),
                source,
            })?;

        let posts: Vec<PostMeta> =
            serde_json::from_str(&content).map_err(|source| AppError::JsonParseError {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("Read {} posts from {}", posts.len(), self.path.display());
        Ok(posts)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
