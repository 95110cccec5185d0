//! Repository layer for catalog reads

pub mod filmworks;
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Filmwork, GenreLink, PersonCredit},
};

pub use memory::MemoryCatalog;

/// Filmworks with the flat association rows that reference them
#[derive(Debug, Clone, Default)]
pub struct FilmRows {
    pub films: Vec<Filmwork>,
    /// One row per genre attached to any of `films`
    pub genres: Vec<GenreLink>,
    /// One row per person credit on any of `films`
    pub credits: Vec<PersonCredit>,
}

/// Catalog size and one window of it, read from the same snapshot
#[derive(Debug, Clone, Default)]
pub struct CatalogWindow {
    pub count: u64,
    /// Empty when `offset >= count`
    pub rows: FilmRows,
}

/// Read access to the film catalog.
///
/// Each call observes a single consistent snapshot of the catalog.
/// Implementations return flat association rows; grouping them per film is
/// done by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Total number of filmworks plus the window at `offset`, ordered by
    /// title then id. Rows are only read when `offset < count`.
    async fn read_window(&self, offset: u64, limit: u64) -> AppResult<CatalogWindow>;

    /// One filmwork with its association rows
    async fn read_filmwork(&self, id: Uuid) -> AppResult<Option<FilmRows>>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed catalog
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
