//! Filmwork reads against the `content` schema.
//!
//! Every read runs inside a `REPEATABLE READ, READ ONLY` transaction so the
//! count, the film rows and their association rows come from one snapshot.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgConnection, Postgres, Row, Transaction};
use uuid::Uuid;

use super::{CatalogStore, CatalogWindow, FilmRows, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{Filmwork, FilmworkType, GenreLink, PersonCredit, PersonRole, Timestamps},
};

const FILMWORK_COLUMNS: &str =
    "id, title, description, creation_date, rating, type, created, modified";

fn filmwork_from_row(r: &PgRow) -> AppResult<Filmwork> {
    let kind: String = r.try_get("type")?;
    Ok(Filmwork {
        id: r.try_get("id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        creation_date: r.try_get("creation_date")?,
        rating: r.try_get("rating")?,
        kind: kind.parse::<FilmworkType>().map_err(AppError::Internal)?,
        timestamps: Timestamps {
            created: r.try_get("created")?,
            modified: r.try_get("modified")?,
        },
    })
}

fn to_sql_bigint(value: u64) -> AppResult<i64> {
    i64::try_from(value).map_err(|_| AppError::Internal(format!("{} exceeds BIGINT", value)))
}

impl Repository {
    async fn begin_snapshot(&self) -> AppResult<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }
}

async fn count_filmworks(conn: &mut PgConnection) -> AppResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content.film_work")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count.max(0) as u64)
}

async fn list_filmworks(conn: &mut PgConnection, offset: u64, limit: u64) -> AppResult<Vec<Filmwork>> {
    let query = format!(
        "SELECT {} FROM content.film_work ORDER BY title, id LIMIT $1 OFFSET $2",
        FILMWORK_COLUMNS
    );
    let rows = sqlx::query(&query)
        .bind(to_sql_bigint(limit)?)
        .bind(to_sql_bigint(offset)?)
        .fetch_all(&mut *conn)
        .await?;

    rows.iter().map(filmwork_from_row).collect()
}

async fn get_filmwork(conn: &mut PgConnection, id: Uuid) -> AppResult<Option<Filmwork>> {
    let query = format!("SELECT {} FROM content.film_work WHERE id = $1", FILMWORK_COLUMNS);
    let row = sqlx::query(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(filmwork_from_row).transpose()
}

async fn genre_links(conn: &mut PgConnection, film_ids: &[Uuid]) -> AppResult<Vec<GenreLink>> {
    if film_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query(
        r#"
        SELECT gfw.film_work_id, g.name
        FROM content.genre_film_work gfw
        JOIN content.genre g ON g.id = gfw.genre_id
        WHERE gfw.film_work_id = ANY($1)
        "#,
    )
    .bind(film_ids)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|r| -> AppResult<GenreLink> {
            Ok(GenreLink {
                film_work_id: r.try_get("film_work_id")?,
                name: r.try_get("name")?,
            })
        })
        .collect()
}

async fn person_credits(conn: &mut PgConnection, film_ids: &[Uuid]) -> AppResult<Vec<PersonCredit>> {
    if film_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query(
        r#"
        SELECT pfw.film_work_id, pfw.role, p.full_name
        FROM content.person_film_work pfw
        JOIN content.person p ON p.id = pfw.person_id
        WHERE pfw.film_work_id = ANY($1)
        "#,
    )
    .bind(film_ids)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|r| -> AppResult<PersonCredit> {
            let role: String = r.try_get("role")?;
            Ok(PersonCredit {
                film_work_id: r.try_get("film_work_id")?,
                role: role.parse::<PersonRole>().map_err(AppError::Internal)?,
                full_name: r.try_get("full_name")?,
            })
        })
        .collect()
}

async fn film_rows(conn: &mut PgConnection, films: Vec<Filmwork>) -> AppResult<FilmRows> {
    let ids: Vec<Uuid> = films.iter().map(|f| f.id).collect();
    let genres = genre_links(&mut *conn, &ids).await?;
    let credits = person_credits(&mut *conn, &ids).await?;

    Ok(FilmRows {
        films,
        genres,
        credits,
    })
}

#[async_trait]
impl CatalogStore for Repository {
    async fn read_window(&self, offset: u64, limit: u64) -> AppResult<CatalogWindow> {
        let mut tx = self.begin_snapshot().await?;

        let count = count_filmworks(&mut *tx).await?;
        // offset < count also guarantees it fits a BIGINT
        let rows = if offset < count {
            let films = list_filmworks(&mut *tx, offset, limit).await?;
            film_rows(&mut *tx, films).await?
        } else {
            FilmRows::default()
        };

        tx.commit().await?;
        Ok(CatalogWindow { count, rows })
    }

    async fn read_filmwork(&self, id: Uuid) -> AppResult<Option<FilmRows>> {
        let mut tx = self.begin_snapshot().await?;

        let rows = match get_filmwork(&mut *tx, id).await? {
            Some(film) => Some(film_rows(&mut *tx, vec![film]).await?),
            None => None,
        };

        tx.commit().await?;
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
