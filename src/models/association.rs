//! Filmwork association (junction) models and the flat rows read from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::common::generate_id;

/// Credit role of a person on a filmwork
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    #[default]
    Actor,
    Director,
    Writer,
}

impl PersonRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Actor => "actor",
            PersonRole::Director => "director",
            PersonRole::Writer => "writer",
        }
    }
}

impl FromStr for PersonRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(PersonRole::Actor),
            "director" => Ok(PersonRole::Director),
            "writer" => Ok(PersonRole::Writer),
            other => Err(format!("unknown person role '{}'", other)),
        }
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Junction row linking a filmwork to a genre. Unique per (film_work_id, genre_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreFilmwork {
    pub id: Uuid,
    pub film_work_id: Uuid,
    pub genre_id: Uuid,
    pub created: DateTime<Utc>,
}

impl GenreFilmwork {
    pub fn new(film_work_id: Uuid, genre_id: Uuid) -> Self {
        Self {
            id: generate_id(),
            film_work_id,
            genre_id,
            created: Utc::now(),
        }
    }
}

/// Junction row crediting a person on a filmwork.
/// Unique per (film_work_id, person_id, role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonFilmwork {
    pub id: Uuid,
    pub film_work_id: Uuid,
    pub person_id: Uuid,
    pub role: PersonRole,
    pub created: DateTime<Utc>,
}

impl PersonFilmwork {
    pub fn new(film_work_id: Uuid, person_id: Uuid, role: PersonRole) -> Self {
        Self {
            id: generate_id(),
            film_work_id,
            person_id,
            role,
            created: Utc::now(),
        }
    }
}

/// Genre name attached to a filmwork, one per junction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreLink {
    pub film_work_id: Uuid,
    pub name: String,
}

/// Person name credited on a filmwork under a role, one per junction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCredit {
    pub film_work_id: Uuid,
    pub role: PersonRole,
    pub full_name: String,
}
