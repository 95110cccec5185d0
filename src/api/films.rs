//! Film catalog endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::FilmworkDetail,
    pagination::{FilmworkPage, PageQuery},
};

/// List films, one page at a time, ordered by title
#[utoipa::path(
    get,
    path = "/films/",
    tag = "films",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of films", body = FilmworkPage),
        (status = 400, description = "Invalid or out of range page", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_films(
    State(state): State<crate::AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Json<FilmworkPage>> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected film list query: {}", e);
        AppError::InvalidPage
    })?;

    let page = state.services.films.list_page(query.page.as_deref()).await?;
    Ok(Json(page))
}

/// Get a single film by ID
#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = "films",
    params(
        ("id" = Uuid, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Film details", body = FilmworkDetail),
        (status = 400, description = "Malformed film ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Film not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_film(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FilmworkDetail>> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId)?;

    let film = state.services.films.get(id).await?;
    Ok(Json(film))
}
