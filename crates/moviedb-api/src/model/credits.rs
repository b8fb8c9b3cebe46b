//! Cast and crew credits.

use serde::{Deserialize, Serialize};

use super::common::MediaType;
use super::person::PersonBasic;

/// Cast member of a movie, series, season or episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cast {
    /// Person ID.
    pub id: u64,
    /// Adult flag.
    pub adult: bool,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: u8,
    /// Main department.
    pub known_for_department: String,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Popularity.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Cast ID (movies only).
    pub cast_id: Option<u32>,
    /// Character played.
    pub character: String,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    pub order: u32,
}

/// Crew member of a movie, series, season or episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crew {
    /// Person ID.
    pub id: u64,
    /// Adult flag.
    pub adult: bool,
    /// Gender.
    pub gender: u8,
    /// Main department.
    pub known_for_department: String,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Popularity.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Department.
    pub department: String,
    /// Job.
    pub job: String,
}

/// Credits of a movie, series, season or episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaCredits {
    /// Owning resource ID.
    pub id: u64,
    /// Cast.
    pub cast: Vec<Cast>,
    /// Crew.
    pub crew: Vec<Crew>,
    /// Guest stars (episodes only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guest_stars: Vec<Cast>,
}

/// A person's credit on a movie or series.
///
/// Movie credits carry `title`/`release_date`, TV credits `name`/`first_air_date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCredit {
    /// Media ID.
    pub id: u64,
    /// Media kind (combined credits only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// Movie title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Original movie title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Series name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Original series name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Movie release date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Series first air date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    /// Character (cast credits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Department (crew credits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job (crew credits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    /// Number of episodes (TV credits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    /// Credit ID.
    pub credit_id: String,
    /// Original language.
    pub original_language: String,
    /// Overview.
    pub overview: String,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Popularity.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
}

/// Credits of a person (`person/{id}/movie_credits`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCredits {
    /// Person ID.
    pub id: u64,
    /// Acting credits.
    pub cast: Vec<PersonCredit>,
    /// Crew credits.
    pub crew: Vec<PersonCredit>,
}

/// A single credit from `credit/{credit_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditInfo {
    /// Credit ID.
    pub id: String,
    /// "cast" or "crew".
    pub credit_type: String,
    /// Department.
    pub department: String,
    /// Job.
    pub job: String,
    /// Media kind.
    pub media_type: Option<MediaType>,
    /// Credited media (movie or series record).
    pub media: serde_json::Value,
    /// Credited person.
    pub person: PersonBasic,
}
