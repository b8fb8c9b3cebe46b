//! Movie and collection records.

use serde::{Deserialize, Serialize};

use super::artwork::Images;
use super::common::{
    Company, ExternalIds, Genre, Keyword, Language, ProductionCountry, ReleaseDates, Results,
    Video,
};
use super::credits::MediaCredits;
use crate::envelope::ResultList;

/// Movie as it appears in search, discover and list results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieBasic {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
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
    /// Video flag.
    pub video: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// The user's rating (rated lists only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Keywords appended to a movie (`{"keywords": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieKeywords {
    /// Keywords.
    pub keywords: Vec<Keyword>,
}

/// Collection a movie belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionBasic {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `movie/{movie_id}`.
///
/// Sub-resources requested through `append_to_response` are filled in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInfo {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Release status (e.g., "Released").
    pub status: Option<String>,
    /// Release date.
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    pub video: bool,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Collection, if any.
    pub belongs_to_collection: Option<CollectionBasic>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Production companies.
    pub production_companies: Vec<Company>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<Language>,
    /// Appended credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<MediaCredits>,
    /// Appended images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Appended videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Results<Video>>,
    /// Appended keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<MovieKeywords>,
    /// Appended external ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended release dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_dates: Option<Results<ReleaseDates>>,
    /// Appended recommendations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<ResultList<MovieBasic>>,
    /// Appended similar movies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<ResultList<MovieBasic>>,
}

/// Response from `collection/{collection_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInfo {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Movies of the collection.
    pub parts: Vec<MovieBasic>,
}
