//! Movies catalog API
//!
//! A read-only REST JSON API over a relational catalog of films, genres and
//! persons, serving paginated film records with their genre and credit names
//! aggregated per film.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn repository::CatalogStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store, &config.pagination)),
        }
    }
}
