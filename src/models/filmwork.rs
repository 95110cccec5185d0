//! Filmwork (movie / TV show) model and its denormalized API representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{generate_id, Timestamps};

/// Kind of filmwork. Stored as its snake_case code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilmworkType {
    #[default]
    Movie,
    TvShow,
}

impl FilmworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilmworkType::Movie => "movie",
            FilmworkType::TvShow => "tv_show",
        }
    }
}

impl FromStr for FilmworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(FilmworkType::Movie),
            "tv_show" => Ok(FilmworkType::TvShow),
            other => Err(format!("unknown filmwork type '{}'", other)),
        }
    }
}

impl std::fmt::Display for FilmworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filmwork row as stored in `content.film_work`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Filmwork {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    /// Premiere date
    pub creation_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub kind: FilmworkType,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Filmwork {
    pub fn new(title: impl Into<String>, kind: FilmworkType) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: None,
            creation_date: None,
            rating: None,
            kind,
            timestamps: Timestamps::now(),
        }
    }
}

/// Film record with aggregated genre and person names, as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilmworkDetail {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub kind: FilmworkType,
    /// Distinct genre names, sorted
    pub genres: Vec<String>,
    /// Distinct names credited as actor, sorted
    pub actors: Vec<String>,
    /// Distinct names credited as director, sorted
    pub directors: Vec<String>,
    /// Distinct names credited as writer, sorted
    pub writers: Vec<String>,
}

impl From<Filmwork> for FilmworkDetail {
    fn from(film: Filmwork) -> Self {
        Self {
            id: film.id,
            title: film.title,
            description: film.description,
            creation_date: film.creation_date,
            rating: film.rating,
            kind: film.kind,
            genres: Vec::new(),
            actors: Vec::new(),
            directors: Vec::new(),
            writers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filmwork_type_codes() {
        assert_eq!("movie".parse::<FilmworkType>(), Ok(FilmworkType::Movie));
        assert_eq!("tv_show".parse::<FilmworkType>(), Ok(FilmworkType::TvShow));
        assert!("series".parse::<FilmworkType>().is_err());
        assert_eq!(FilmworkType::TvShow.to_string(), "tv_show");
        assert_eq!(
            serde_json::to_value(FilmworkType::TvShow).unwrap(),
            serde_json::json!("tv_show")
        );
    }

    #[test]
    fn test_rating_bounds() {
        let mut film = Filmwork::new("Solaris", FilmworkType::Movie);
        film.rating = Some(100.0);
        assert!(film.validate().is_ok());

        film.rating = Some(0.0);
        assert!(film.validate().is_ok());

        film.rating = Some(100.5);
        assert!(film.validate().is_err());

        film.rating = Some(-1.0);
        assert!(film.validate().is_err());

        film.rating = None;
        assert!(film.validate().is_ok());
    }

    #[test]
    fn test_detail_serializes_type_key_and_empty_lists() {
        let film = Filmwork::new("Stalker", FilmworkType::Movie);
        let value = serde_json::to_value(FilmworkDetail::from(film)).unwrap();

        assert_eq!(value["type"], "movie");
        assert!(value.get("kind").is_none());
        for key in ["genres", "actors", "directors", "writers"] {
            assert_eq!(value[key], serde_json::json!([]), "{} must be an empty list", key);
        }
    }
}
