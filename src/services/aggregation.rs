//! Per-film aggregation of genre and person names.
//!
//! Association rows are grouped by (film, field) and reduced to sorted sets of
//! distinct names. Films keep the order they were given in.

use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use crate::models::{Filmwork, FilmworkDetail, GenreLink, PersonCredit, PersonRole};

#[derive(Default)]
struct NameSets {
    genres: BTreeSet<String>,
    actors: BTreeSet<String>,
    directors: BTreeSet<String>,
    writers: BTreeSet<String>,
}

impl NameSets {
    fn for_role(&mut self, role: PersonRole) -> &mut BTreeSet<String> {
        match role {
            PersonRole::Actor => &mut self.actors,
            PersonRole::Director => &mut self.directors,
            PersonRole::Writer => &mut self.writers,
        }
    }
}

/// Build one detail record per film from its scalar fields and association rows.
/// Rows for films not in `films` are ignored.
pub fn aggregate(
    films: Vec<Filmwork>,
    genres: Vec<GenreLink>,
    credits: Vec<PersonCredit>,
) -> Vec<FilmworkDetail> {
    let mut groups: HashMap<Uuid, NameSets> = HashMap::with_capacity(films.len());

    for link in genres {
        groups
            .entry(link.film_work_id)
            .or_default()
            .genres
            .insert(link.name);
    }

    for credit in credits {
        groups
            .entry(credit.film_work_id)
            .or_default()
            .for_role(credit.role)
            .insert(credit.full_name);
    }

    films
        .into_iter()
        .map(|film| {
            let names = groups.remove(&film.id).unwrap_or_default();
            FilmworkDetail {
                genres: names.genres.into_iter().collect(),
                actors: names.actors.into_iter().collect(),
                directors: names.directors.into_iter().collect(),
                writers: names.writers.into_iter().collect(),
                ..FilmworkDetail::from(film)
            }
        })
        .collect()
}
