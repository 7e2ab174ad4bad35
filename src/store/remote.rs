use super::PostSource;
use crate::constants::POST_META_ROUTE;
use crate::error::AppError;
use crate::model::PostMeta;
use crate::types::ValidatedUrl;
use reqwest::Client;

/// Fetches post metadata from the deployed site's static asset.
#[derive(Debug, Clone)]
pub struct RemotePostStore {
    client: Client,
    url: String,
}

impl RemotePostStore {
    /// Store fetching `<site>/data/postMeta.json`.
    pub fn for_site(site: &ValidatedUrl) -> Self {
        Self::with_client(Client::new(), site)
    }

    pub fn with_client(client: Client, site: &ValidatedUrl) -> Self {
        Self {
            client,
            url: format!("{}{}", site.as_base(), POST_META_ROUTE),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the posts. Network failures, non-success statuses and
    /// malformed bodies are logged and yield an empty list.
    pub async fn fetch_posts(&self) -> Vec<PostMeta> {
        match self.load_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                log::error!("Error fetching post metadata: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl PostSource for RemotePostStore {
    async fn load_posts(&self) -> Result<Vec<PostMeta>, AppError> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().await?;
        let posts: Vec<PostMeta> = serde_json::from_str(&body)?;
        log::debug!("Fetched {} posts from {}", posts.len(), self.url);
        Ok(posts)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_points_at_static_asset() {
        let site = ValidatedUrl::parse("https://blog.example.com/").unwrap();
        let store = RemotePostStore::for_site(&site);
        assert_eq!(store.url(), "https://blog.example.com/data/postMeta.json");
    }
}
