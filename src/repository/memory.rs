//! In-process catalog store.
//!
//! Holds the same five relations as the PostgreSQL schema and enforces the
//! same constraints on insert: validated field ranges, existing foreign keys,
//! unique (film, genre) pairs and unique (film, person, role) triples.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use super::{CatalogStore, CatalogWindow, FilmRows};
use crate::{
    error::{AppError, AppResult},
    models::{
        Filmwork, Genre, GenreFilmwork, GenreLink, Person, PersonCredit, PersonFilmwork,
        PersonRole,
    },
};

#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    films: HashMap<Uuid, Filmwork>,
    genres: HashMap<Uuid, Genre>,
    persons: HashMap<Uuid, Person>,
    genre_filmworks: Vec<GenreFilmwork>,
    person_filmworks: Vec<PersonFilmwork>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_filmwork(&mut self, film: Filmwork) -> AppResult<Uuid> {
        film.validate()?;
        if self.films.contains_key(&film.id) {
            return Err(AppError::Conflict(format!("Filmwork {} already exists", film.id)));
        }
        let id = film.id;
        self.films.insert(id, film);
        Ok(id)
    }

    pub fn insert_genre(&mut self, genre: Genre) -> AppResult<Uuid> {
        genre.validate()?;
        if self.genres.contains_key(&genre.id) {
            return Err(AppError::Conflict(format!("Genre {} already exists", genre.id)));
        }
        let id = genre.id;
        self.genres.insert(id, genre);
        Ok(id)
    }

    pub fn insert_person(&mut self, person: Person) -> AppResult<Uuid> {
        person.validate()?;
        if self.persons.contains_key(&person.id) {
            return Err(AppError::Conflict(format!("Person {} already exists", person.id)));
        }
        let id = person.id;
        self.persons.insert(id, person);
        Ok(id)
    }

    /// Attach a genre to a filmwork
    pub fn link_genre(&mut self, film_work_id: Uuid, genre_id: Uuid) -> AppResult<()> {
        self.require_film(film_work_id)?;
        if !self.genres.contains_key(&genre_id) {
            return Err(AppError::NotFound(format!("Genre {} not found", genre_id)));
        }
        if self
            .genre_filmworks
            .iter()
            .any(|l| l.film_work_id == film_work_id && l.genre_id == genre_id)
        {
            return Err(AppError::Conflict(format!(
                "Genre {} is already linked to filmwork {}",
                genre_id, film_work_id
            )));
        }

        self.genre_filmworks
            .push(GenreFilmwork::new(film_work_id, genre_id));
        Ok(())
    }

    /// Credit a person on a filmwork under `role`
    pub fn credit_person(
        &mut self,
        film_work_id: Uuid,
        person_id: Uuid,
        role: PersonRole,
    ) -> AppResult<()> {
        self.require_film(film_work_id)?;
        if !self.persons.contains_key(&person_id) {
            return Err(AppError::NotFound(format!("Person {} not found", person_id)));
        }
        if self.person_filmworks.iter().any(|l| {
            l.film_work_id == film_work_id && l.person_id == person_id && l.role == role
        }) {
            return Err(AppError::Conflict(format!(
                "Person {} is already credited as {} on filmwork {}",
                person_id, role, film_work_id
            )));
        }

        self.person_filmworks
            .push(PersonFilmwork::new(film_work_id, person_id, role));
        Ok(())
    }

    fn require_film(&self, id: Uuid) -> AppResult<()> {
        if self.films.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Filmwork {} not found", id)))
        }
    }
}

impl MemoryCatalog {
    fn sorted_films(&self) -> Vec<&Filmwork> {
        let mut films: Vec<&Filmwork> = self.films.values().collect();
        films.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        films
    }

    fn film_rows(&self, films: Vec<Filmwork>) -> FilmRows {
        let genres = self
            .genre_filmworks
            .iter()
            .filter(|l| films.iter().any(|f| f.id == l.film_work_id))
            .filter_map(|l| {
                self.genres.get(&l.genre_id).map(|g| GenreLink {
                    film_work_id: l.film_work_id,
                    name: g.name.clone(),
                })
            })
            .collect();

        let credits = self
            .person_filmworks
            .iter()
            .filter(|l| films.iter().any(|f| f.id == l.film_work_id))
            .filter_map(|l| {
                self.persons.get(&l.person_id).map(|p| PersonCredit {
                    film_work_id: l.film_work_id,
                    role: l.role,
                    full_name: p.full_name.clone(),
                })
            })
            .collect();

        FilmRows {
            films,
            genres,
            credits,
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn read_window(&self, offset: u64, limit: u64) -> AppResult<CatalogWindow> {
        let count = self.films.len() as u64;
        let films: Vec<Filmwork> = self
            .sorted_films()
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(CatalogWindow {
            count,
            rows: self.film_rows(films),
        })
    }

    async fn read_filmwork(&self, id: Uuid) -> AppResult<Option<FilmRows>> {
        Ok(self
            .films
            .get(&id)
            .cloned()
            .map(|film| self.film_rows(vec![film])))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
