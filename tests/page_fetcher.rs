// Page fetching against a mocked v3 `loadPageChunk` endpoint.

mod common;

use common::{page_id, FIRST_CHUNK, LAST_CHUNK};
use httpmock::prelude::*;
use notionfolio::{AuthToken, NotionHttpClient, PageFetcher, ValidatedUrl};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn fetcher_for(server: &MockServer, token: Option<&AuthToken>) -> PageFetcher {
    let base = ValidatedUrl::parse(&server.base_url()).unwrap();
    let client = NotionHttpClient::new(base, token).unwrap();
    PageFetcher::new(Arc::new(client))
}

#[tokio::test]
async fn single_chunk_page() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/loadPageChunk")
                .body_includes("\"pageId\":\"550e8400-e29b-41d4-a716-446655440000\"");
            then.status(200)
                .header("content-type", "application/json")
                .body(LAST_CHUNK.replace(
                    "7c1e2f30-0000-4000-8000-000000000002",
                    "550e8400-e29b-41d4-a716-446655440000",
                ));
        })
        .await;

    let tree = fetcher_for(&server, None)
        .fetch_page_blocks(&page_id())
        .await
        .expect("page should load");

    assert_eq!(tree.block_count(), 1);
    assert!(tree.root_block().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn follows_cursor_across_chunks() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/loadPageChunk")
                .body_includes("\"chunkNumber\":0");
            then.status(200).body(FIRST_CHUNK);
        })
        .await;
    let last = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/loadPageChunk")
                .body_includes("\"chunkNumber\":1");
            then.status(200).body(LAST_CHUNK);
        })
        .await;

    let tree = fetcher_for(&server, None)
        .fetch_page_blocks(&page_id())
        .await
        .expect("page should load");

    assert_eq!(tree.block_count(), 3);
    assert!(tree.contains_block("7c1e2f30-0000-4000-8000-000000000002"));
    assert!(tree.record_map().tables.contains_key("notion_user"));
    assert!(tree.record_map().tables.contains_key("signed_urls"));
    first.assert_async().await;
    last.assert_async().await;
}

#[tokio::test]
async fn sends_session_token_as_cookie() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/loadPageChunk")
                .header("cookie", "token_v2=v02%3Auser_token");
            then.status(200).body(LAST_CHUNK);
        })
        .await;

    let token = AuthToken::new("v02%3Auser_token").unwrap();
    let tree = fetcher_for(&server, Some(&token))
        .fetch_page_blocks(&page_id())
        .await;

    assert!(tree.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn provider_error_is_none_and_not_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/loadPageChunk");
            then.status(401)
                .body(r#"{"errorId":"e1","name":"UnauthorizedError","message":"Token was invalid or expired."}"#);
        })
        .await;

    let fetcher = fetcher_for(&server, None);
    assert!(fetcher.fetch_page_blocks(&page_id()).await.is_none());
    assert_eq!(mock.calls_async().await, 1);

    let err = fetcher.try_fetch_page_blocks(&page_id()).await.unwrap_err();
    assert!(err.to_string().contains("unauthorized"));
}

#[tokio::test]
async fn empty_record_map_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/loadPageChunk");
            then.status(200).body(r#"{"recordMap":{"block":{}},"cursor":{"stack":[]}}"#);
        })
        .await;

    assert!(fetcher_for(&server, None)
        .fetch_page_blocks(&page_id())
        .await
        .is_none());
}

#[tokio::test]
async fn slow_provider_hits_the_deadline() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/loadPageChunk");
            then.status(200)
                .delay(Duration::from_secs(5))
                .body(LAST_CHUNK);
        })
        .await;

    let fetcher = fetcher_for(&server, None).with_timeout(Duration::from_millis(200));
    let started = Instant::now();

    let err = fetcher.try_fetch_page_blocks(&page_id()).await.unwrap_err();
    assert!(err.is_timeout(), "expected a timeout, got {err}");
    assert!(err.to_string().contains("timed out"));
    assert!(started.elapsed() < Duration::from_secs(4));

    assert!(fetcher.fetch_page_blocks(&page_id()).await.is_none());
}

#[tokio::test]
async fn concurrent_fetches_are_independent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/loadPageChunk");
            then.status(200).body(LAST_CHUNK);
        })
        .await;

    let fetcher = fetcher_for(&server, None);
    let id = page_id();
    let (a, b) = tokio::join!(fetcher.fetch_page_blocks(&id), fetcher.fetch_page_blocks(&id));

    assert!(a.is_some() && b.is_some());
    assert_eq!(mock.calls_async().await, 2, "no request deduplication");
}
