// src/server.rs
//! JSON API and static data assets for the export/preview context.
//!
//! - `GET /api/posts[?category=]`: post metadata, 500 when unreadable
//! - `GET /api/pages/{id}`: a page's block tree, 502 when unavailable
//! - `GET /data/*`: files under `<public>/data`, including `postMeta.json`

use crate::api::PageFetcher;
use crate::constants::{LOAD_PAGE_FAILED, LOAD_POSTS_FAILED, POSTS_API_ROUTE};
use crate::error::AppError;
use crate::model::listing;
use crate::store::PostSource;
use crate::types::PageId;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Everything the handlers need, built once by the caller.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostSource>,
    pub pages: PageFetcher,
    pub public_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    category: Option<String>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let data_dir = state.public_dir.join("data");
    Router::new()
        .route(POSTS_API_ROUTE, get(list_posts))
        .route("/api/pages/{id}", get(page_blocks))
        .nest_service("/data", ServeDir::new(data_dir))
        .with_state(state)
}

/// Binds `addr` and serves the router until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving {} on http://{}", state.public_dir.display(), addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn list_posts(State(state): State<AppState>, Query(query): Query<PostsQuery>) -> Response {
    let posts = match state.posts.load_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Error reading posts: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, LOAD_POSTS_FAILED);
        }
    };

    match query.category.as_deref() {
        Some(category) => {
            let filtered: Vec<_> = listing::in_category(&posts, category)
                .into_iter()
                .cloned()
                .collect();
            Json(filtered).into_response()
        }
        None => Json(posts).into_response(),
    }
}

async fn page_blocks(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match PageId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.pages.fetch_page_blocks(&id).await {
        Some(tree) => Json(tree).into_response(),
        None => error_response(StatusCode::BAD_GATEWAY, LOAD_PAGE_FAILED),
    }
}
