//! Page-number pagination over the film catalog.
//!
//! Pages are 1-based and have a fixed size taken from configuration. A page is
//! valid only if it starts inside the catalog, so an empty catalog has no valid
//! page at all.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::FilmworkDetail,
};

/// Raw `page` query parameter. Kept as a string so malformed values surface
/// as `InvalidPage` instead of an extractor rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default: 1)
    pub page: Option<String>,
}

/// Parse the requested page number. Absent means the first page.
///
/// A well-formed positive number too large for `i64` is a page past the end
/// of any catalog, not a malformed one.
pub fn parse_page(raw: Option<&str>) -> AppResult<u64> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    match raw.trim().parse::<i64>() {
        Ok(page) if page > 0 => Ok(page as u64),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(AppError::PageOutOfRange),
        _ => Err(AppError::InvalidPage),
    }
}

/// Number of pages needed for `count` rows
pub fn total_pages(count: u64, page_size: u64) -> u64 {
    count.div_ceil(page_size)
}

/// Row window selected by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Rows covered by `page`. Fails when the offset does not fit a `u64`.
    pub fn for_page(page: u64, page_size: u64) -> AppResult<Self> {
        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
            .ok_or(AppError::PageOutOfRange)?;

        Ok(Self {
            page,
            offset,
            limit: page_size,
        })
    }

    /// A page must start inside a catalog of `count` rows
    pub fn ensure_within(&self, count: u64) -> AppResult<()> {
        if self.offset >= count {
            return Err(AppError::PageOutOfRange);
        }
        Ok(())
    }
}

/// Navigation metadata for a resolved page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub count: u64,
    pub total_pages: u64,
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

impl PageMeta {
    pub fn new(page: u64, page_size: u64, count: u64) -> Self {
        let total_pages = total_pages(count, page_size);
        Self {
            count,
            total_pages,
            prev: (page > 1).then(|| page - 1),
            next: (page < total_pages).then(|| page + 1),
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(FilmworkPage = Paginated<FilmworkDetail>)]
pub struct Paginated<T> {
    /// Total number of films in the catalog
    pub count: u64,
    /// Number of pages at the configured page size
    pub total_pages: u64,
    /// Previous page number, null on the first page
    pub prev: Option<u64>,
    /// Next page number, null on the last page
    pub next: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(meta: PageMeta, results: Vec<T>) -> Self {
        Self {
            count: meta.count,
            total_pages: meta.total_pages,
            prev: meta.prev,
            next: meta.next,
            results,
        }
    }
}
