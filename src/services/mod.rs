//! Business logic services

pub mod aggregation;
pub mod films;

use std::sync::Arc;

use crate::{config::PaginationConfig, repository::CatalogStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub films: films::FilmworkService,
}

impl Services {
    /// Create all services on top of the given catalog store
    pub fn new(store: Arc<dyn CatalogStore>, pagination: &PaginationConfig) -> Self {
        Self {
            films: films::FilmworkService::new(store, pagination.page_size),
        }
    }
}
