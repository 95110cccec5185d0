//! Film catalog read service

use std::num::NonZeroU32;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::FilmworkDetail,
    pagination::{self, FilmworkPage, PageMeta, PageWindow, Paginated},
    repository::{CatalogStore, CatalogWindow},
};

use super::aggregation::aggregate;

#[derive(Clone)]
pub struct FilmworkService {
    store: Arc<dyn CatalogStore>,
    page_size: u64,
}

impl FilmworkService {
    pub fn new(store: Arc<dyn CatalogStore>, page_size: NonZeroU32) -> Self {
        Self {
            store,
            page_size: u64::from(page_size.get()),
        }
    }

    /// Resolve a raw `page` parameter into a page of aggregated films.
    /// The parameter is validated before the store is touched, and the count
    /// and rows come from a single store read.
    pub async fn list_page(&self, raw_page: Option<&str>) -> AppResult<FilmworkPage> {
        let page = pagination::parse_page(raw_page)?;
        let window = PageWindow::for_page(page, self.page_size)?;

        let CatalogWindow { count, rows } =
            self.store.read_window(window.offset, window.limit).await?;
        window.ensure_within(count)?;
        tracing::debug!(page, offset = window.offset, count, "Listing filmworks");

        let results = aggregate(rows.films, rows.genres, rows.credits);
        let meta = PageMeta::new(page, self.page_size, count);
        Ok(Paginated::new(meta, results))
    }

    /// Get one film with its aggregated names
    pub async fn get(&self, id: Uuid) -> AppResult<FilmworkDetail> {
        let rows = self
            .store
            .read_filmwork(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Film not found.".to_string()))?;

        aggregate(rows.films, rows.genres, rows.credits)
            .pop()
            .ok_or_else(|| AppError::Internal(format!("Aggregation dropped film {}", id)))
    }

    /// Check store connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
