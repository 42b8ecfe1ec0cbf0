//! In-memory feed server speaking the feed wire format.
//!
//! `GET /feed` returns `{"items": [...]}` in insertion order, `POST /feed`
//! appends an entry, `DELETE /feed` clears the list.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: String,
}

#[derive(Deserialize)]
pub struct CreateEntry {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedPage {
    pub items: Vec<FeedEntry>,
}

pub type Db = Arc<RwLock<Vec<FeedEntry>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with `entries`.
pub fn app_with(entries: Vec<FeedEntry>) -> Router {
    let db: Db = Arc::new(RwLock::new(entries));
    Router::new()
        .route("/feed", get(list_entries).post(create_entry).delete(clear_entries))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, entries: Vec<FeedEntry>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(entries)).await
}

async fn list_entries(State(db): State<Db>) -> Json<FeedPage> {
    let entries = db.read().await;
    tracing::debug!(count = entries.len(), "serving feed");
    Json(FeedPage {
        items: entries.clone(),
    })
}

async fn create_entry(
    State(db): State<Db>,
    Json(input): Json<CreateEntry>,
) -> (StatusCode, Json<FeedEntry>) {
    let entry = FeedEntry {
        id: input.id.unwrap_or_else(Uuid::new_v4),
        description: input.description,
        location: input.location,
        image: input.image,
    };
    db.write().await.push(entry.clone());
    (StatusCode::CREATED, Json(entry))
}

async fn clear_entries(State(db): State<Db>) -> StatusCode {
    db.write().await.clear();
    StatusCode::NO_CONTENT
}
