//! Shared helpers for API integration tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use movies_api::{
    api,
    config::AppConfig,
    models::{Filmwork, FilmworkType},
    repository::{CatalogStore, CatalogWindow, FilmRows, MemoryCatalog},
    AppError, AppResult, AppState,
};

/// Build the full router on top of `store` with default configuration.
pub fn build_test_app(store: impl CatalogStore + 'static) -> Router {
    api::create_router(AppState::new(&AppConfig::default(), Arc::new(store)))
}

/// Catalog holding `n` films titled "Film 000", "Film 001", ...
pub fn catalog_with_films(n: usize) -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    for i in 0..n {
        let mut film = Filmwork::new(format!("Film {:03}", i), FilmworkType::Movie);
        film.rating = Some((i % 101) as f64);
        catalog.insert_filmwork(film).expect("seed film");
    }
    catalog
}

pub async fn request(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// GET `uri` and decode the body as JSON
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = request(app, Method::GET, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Store whose every query fails like an unreachable database
pub struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn read_window(&self, _offset: u64, _limit: u64) -> AppResult<CatalogWindow> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn read_filmwork(&self, _id: Uuid) -> AppResult<Option<FilmRows>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
