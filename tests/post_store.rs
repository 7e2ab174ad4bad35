// Post metadata: local file, remote static asset, and the fallback feed.

mod common;

use common::{public_dir_with, POST_META};
use httpmock::prelude::*;
use notionfolio::{
    LocalPostStore, PostFeed, PostListing, PostMeta, PostSource, RemotePostStore, ValidatedUrl,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn ids(posts: &[PostMeta]) -> Vec<String> {
    posts.iter().map(|p| p.id().into_owned()).collect()
}

#[tokio::test]
async fn local_store_keeps_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPostStore::in_public_dir(public_dir_with(dir.path(), POST_META));

    let posts = store.read_posts().await;
    assert_eq!(
        ids(&posts),
        vec![
            "6f2a1c0e8b4d4e5fa1b2c3d4e5f60718",
            "0a9b8c7d6e5f40312233445566778899",
            "11223344556677889900aabbccddeeff",
        ]
    );
    assert_eq!(posts[0].fields()["cover"], "/images/rebuild.png");
}

#[tokio::test]
async fn local_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPostStore::in_public_dir(dir.path());

    assert!(store.read_posts().await.is_empty());
    assert!(store.load_posts().await.is_err());
}

#[tokio::test]
async fn local_store_malformed_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPostStore::in_public_dir(public_dir_with(dir.path(), "[{\"id\": \"a\","));

    assert!(store.read_posts().await.is_empty());
    let err = store.load_posts().await.unwrap_err();
    assert!(err.to_string().contains("postMeta.json"));
}

#[tokio::test]
async fn local_store_empty_array_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalPostStore::in_public_dir(public_dir_with(dir.path(), "[]"));

    assert_eq!(store.load_posts().await.unwrap(), Vec::<PostMeta>::new());
}

#[tokio::test]
async fn remote_store_reads_static_asset() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/postMeta.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(POST_META);
        })
        .await;

    let site = ValidatedUrl::parse(&server.base_url()).unwrap();
    let posts = RemotePostStore::for_site(&site).fetch_posts().await;

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[1].title(), Some("A week in Kyoto"));
    mock.assert_async().await;
}

#[tokio::test]
async fn remote_store_server_error_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/postMeta.json");
            then.status(500).body("boom");
        })
        .await;

    let site = ValidatedUrl::parse(&server.base_url()).unwrap();
    let store = RemotePostStore::for_site(&site);

    assert!(store.fetch_posts().await.is_empty());
    let err = store.load_posts().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn remote_store_garbage_body_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/postMeta.json");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let site = ValidatedUrl::parse(&server.base_url()).unwrap();
    assert!(RemotePostStore::for_site(&site).fetch_posts().await.is_empty());
}

#[tokio::test]
async fn remote_store_unreachable_host_is_empty() {
    // Nothing listens on port 9 locally.
    let site = ValidatedUrl::parse("http://127.0.0.1:9").unwrap();
    assert!(RemotePostStore::for_site(&site).fetch_posts().await.is_empty());
}

#[tokio::test]
async fn feed_falls_back_to_local_file_when_site_is_down() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/postMeta.json");
            then.status(503);
        })
        .await;
    let dir = tempfile::tempdir().unwrap();
    let local = LocalPostStore::in_public_dir(public_dir_with(dir.path(), POST_META));
    let site = ValidatedUrl::parse(&server.base_url()).unwrap();

    let remote: Arc<dyn PostSource> = Arc::new(RemotePostStore::for_site(&site));
    let feed = PostFeed::new(remote).with_fallback(Arc::new(local));

    match feed.best_available().await {
        PostListing::Available(posts) => assert_eq!(posts.len(), 3),
        PostListing::Unavailable => panic!("fallback should have answered"),
    }
}

#[tokio::test]
async fn feed_without_any_source_signals_error_not_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = LocalPostStore::in_public_dir(dir.path());

    let listing = PostFeed::new(Arc::new(missing)).best_available().await;

    assert_eq!(listing, PostListing::Unavailable);
    assert_ne!(listing, PostListing::Available(Vec::new()));
    assert_eq!(listing.error_message(), Some("Failed to load posts"));
}
