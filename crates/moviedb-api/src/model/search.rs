//! Multi-search and find results.

use serde::{Deserialize, Serialize};

use super::movie::MovieBasic;
use super::person::PersonBasic;
use super::tv::{Episode, Season, TvBasic};

/// One result of `search/multi`, tagged by `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MultiResult {
    /// A movie.
    Movie(MovieBasic),
    /// A series.
    Tv(TvBasic),
    /// A person.
    Person(PersonBasic),
}

impl MultiResult {
    /// TMDB ID of the result.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(m) => m.id,
            Self::Tv(t) => t.id,
            Self::Person(p) => p.id,
        }
    }
}

/// Response from `find/{external_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindResults {
    /// Matching movies.
    pub movie_results: Vec<MovieBasic>,
    /// Matching people.
    pub person_results: Vec<PersonBasic>,
    /// Matching series.
    pub tv_results: Vec<TvBasic>,
    /// Matching episodes.
    pub tv_episode_results: Vec<Episode>,
    /// Matching seasons.
    pub tv_season_results: Vec<Season>,
}

impl FindResults {
    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movie_results.is_empty()
            && self.person_results.is_empty()
            && self.tv_results.is_empty()
            && self.tv_episode_results.is_empty()
            && self.tv_season_results.is_empty()
    }
}
