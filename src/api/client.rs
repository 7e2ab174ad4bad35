// src/api/client.rs
//! Pure HTTP client wrapper for Notion's v3 API.
//!
//! This module provides a thin wrapper around reqwest for making
//! requests to the v3 API. It handles authentication, base URL and
//! per-request deadlines without parsing or business logic.

use super::parser;
use super::responses::{ChunkCursor, LoadPageChunkRequest};
use super::{Deadline, PageSource};
use crate::constants::{PAGE_CHUNK_LIMIT, PAGE_MAX_CHUNKS};
use crate::error::{AppError, NotionErrorCode};
use crate::model::{BlockTree, RecordMap};
use crate::types::{AuthToken, PageId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;

/// A thin wrapper around reqwest Client for v3 API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl NotionHttpClient {
    /// Creates a client for `base_url`, authenticated with `token` when given.
    pub fn new(base_url: ValidatedUrl, token: Option<&AuthToken>) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for v3 API requests.
    fn create_headers(token: Option<&AuthToken>) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        if let Some(token) = token {
            let cookie = format!("token_v2={}", token.as_str());
            headers.insert(
                header::COOKIE,
                header::HeaderValue::from_str(&cookie).map_err(|e| {
                    AppError::MissingConfiguration(format!("Invalid session token format: {}", e))
                })?,
            );
        }

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    ///
    /// `timeout` bounds the whole request, so an expired deadline aborts
    /// the connection instead of leaving it running in the background.
    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        timeout: Duration,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url.as_base(), endpoint);
        log::debug!("POST {} (timeout {:?})", url, timeout);

        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .await?;

        log::debug!("{} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl PageSource for NotionHttpClient {
    async fn load_page(&self, id: &PageId, deadline: Deadline) -> Result<BlockTree, AppError> {
        let mut record_map = RecordMap::default();
        let mut cursor = ChunkCursor::default();

        for chunk_number in 0..PAGE_MAX_CHUNKS {
            let remaining = deadline
                .remaining()
                .ok_or_else(|| deadline.exceeded(format!("loadPageChunk for {}", id)))?;

            let request = LoadPageChunkRequest {
                page_id: id.to_dashed(),
                limit: PAGE_CHUNK_LIMIT,
                cursor,
                chunk_number,
                vertical_columns: false,
            };
            let response = self.post("loadPageChunk", &request, remaining).await?;
            let chunk = parser::parse_page_chunk(extract_response_text(response).await?)?;

            record_map.merge(chunk.record_map);
            if chunk.cursor.is_exhausted() {
                break;
            }
            if chunk_number + 1 == PAGE_MAX_CHUNKS {
                log::warn!(
                    "Page {} still has content after {} chunks; returning what was loaded",
                    id,
                    PAGE_MAX_CHUNKS
                );
            }
            cursor = chunk.cursor;
        }

        // Private or missing pages come back as an empty record map.
        if record_map.block.is_empty() {
            return Err(AppError::NotionService {
                code: NotionErrorCode::ObjectNotFound,
                message: format!("page {} returned no blocks (missing or not public)", id),
                status: reqwest::StatusCode::OK,
            });
        }

        Ok(BlockTree::new(id.clone(), record_map))
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
