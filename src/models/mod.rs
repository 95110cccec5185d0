//! Data models for the movies catalog

pub mod association;
pub mod common;
pub mod filmwork;
pub mod genre;
pub mod person;

// Re-export commonly used types
pub use association::{GenreFilmwork, GenreLink, PersonCredit, PersonFilmwork, PersonRole};
pub use common::Timestamps;
pub use filmwork::{Filmwork, FilmworkDetail, FilmworkType};
pub use genre::Genre;
pub use person::Person;
