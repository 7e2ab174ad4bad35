// src/api/parser.rs
//! Turns raw v3 API responses into values or typed errors.

use super::client::ApiResponse;
use super::responses::{LoadPageChunkResponse, NotionErrorBody};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;

/// Parse any v3 API response, splitting on the HTTP status.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        parse_error(&result.data, result.status, &result.url)
    }
}

/// Parse one `loadPageChunk` response.
pub fn parse_page_chunk(result: ApiResponse<String>) -> Result<LoadPageChunkResponse, AppError> {
    parse_api_response(result)
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(notion_error) = serde_json::from_str::<NotionErrorBody>(body) {
        if let Some(error_id) = &notion_error.error_id {
            log::debug!("Notion error id {} for {}", error_id, url);
        }
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_name(&notion_error.name),
            message: notion_error.message,
            status,
        });
    }

    // Fallback to generic error with HTTP status code
    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
    })
}

/// First characters of a body, cut on a char boundary.
fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
