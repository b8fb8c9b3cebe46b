//! TV series, season and episode records.

use serde::{Deserialize, Serialize};

use super::artwork::Images;
use super::common::{Company, ExternalIds, Genre, Network, Results, Video};
use super::credits::{Cast, Crew, MediaCredits};

/// Series as it appears in search, discover and list results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvBasic {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// The user's rating (rated lists only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Creator of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Credit ID.
    pub credit_id: String,
    /// Name.
    pub name: String,
    /// Gender.
    pub gender: u8,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Season summary within TV details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    pub episode_count: u32,
    /// Air date of this season.
    pub air_date: Option<String>,
    /// Season name.
    pub name: String,
    /// Season overview.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
}

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvInfo {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// Spoken languages (ISO 639-1).
    pub languages: Vec<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Typical episode runtimes in minutes.
    pub episode_run_time: Vec<u32>,
    /// Season summaries.
    pub seasons: Vec<SeasonSummary>,
    /// Status (e.g., "Returning Series", "Ended").
    pub status: Option<String>,
    /// Series type (e.g., "Scripted").
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Creators.
    pub created_by: Vec<Creator>,
    /// Networks.
    pub networks: Vec<Network>,
    /// Production companies.
    pub production_companies: Vec<Company>,
    /// Whether the show is still in production.
    pub in_production: bool,
    /// Last aired episode.
    pub last_episode_to_air: Option<Episode>,
    /// Next scheduled episode.
    pub next_episode_to_air: Option<Episode>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Appended credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<MediaCredits>,
    /// Appended images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Appended videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Results<Video>>,
    /// Appended external ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
}

/// Response from `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Season overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Parent show ID (find results only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_id: Option<u64>,
    /// Episodes in this season.
    pub episodes: Vec<Episode>,
    /// Vote average.
    pub vote_average: f64,
    /// Appended credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<MediaCredits>,
    /// Appended external ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
}

/// A single episode, standalone or within a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode name.
    pub name: String,
    /// Episode overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Season number.
    pub season_number: u32,
    /// Parent show ID.
    pub show_id: u64,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Production code.
    pub production_code: Option<String>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Episode type (e.g., "standard", "finale").
    pub episode_type: Option<String>,
    /// Crew of the episode.
    pub crew: Vec<Crew>,
    /// Guest stars of the episode.
    pub guest_stars: Vec<Cast>,
    /// The user's rating (rated episode lists only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}
