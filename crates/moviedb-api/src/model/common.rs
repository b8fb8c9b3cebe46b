//! Small records shared by several resources.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Media kind used in write bodies and tagged results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film.
    #[default]
    Movie,
    /// TV series.
    Tv,
}

impl MediaType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor status record returned by write operations and error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode {
    /// TMDB status code.
    pub status_code: u32,
    /// Human readable message.
    pub status_message: String,
    /// Success flag (absent on older endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Deserializes an id that TMDB sends either as a string or a number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Keyword entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// Language (ISO 639-1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// English name.
    pub english_name: String,
    /// Native name.
    pub name: String,
}

/// Country from `configuration/countries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// English name.
    pub english_name: String,
    /// Native name.
    pub native_name: String,
}

/// Production country of a movie or series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// Production company summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin.
    pub origin_country: String,
}

/// Full company record from `company/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Headquarters location.
    pub headquarters: String,
    /// Homepage URL.
    pub homepage: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin.
    pub origin_country: String,
    /// Parent company, if any.
    pub parent_company: Option<Company>,
}

/// TV network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    /// Network ID.
    pub id: u64,
    /// Network name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin.
    pub origin_country: String,
    /// Headquarters (detail endpoint only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    /// Homepage (detail endpoint only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Alternative title of a movie or series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitle {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Title text.
    pub title: String,
    /// Title type (e.g. "working title").
    #[serde(rename = "type")]
    pub title_type: String,
}

/// Localized fields of a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    /// Movie title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Series or person name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overview text.
    pub overview: String,
    /// Homepage.
    pub homepage: String,
    /// Tagline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// Translation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Native language name.
    pub name: String,
    /// English language name.
    pub english_name: String,
    /// Translated fields.
    pub data: TranslationData,
}

/// Video (trailer, clip, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Site-specific key (e.g. `YouTube` id).
    pub key: String,
    /// Video name.
    pub name: String,
    /// Hosting site.
    pub site: String,
    /// Resolution.
    pub size: u32,
    /// Video type (e.g. "Trailer").
    #[serde(rename = "type")]
    pub video_type: String,
    /// Official flag.
    pub official: bool,
    /// Publication timestamp.
    pub published_at: Option<String>,
}

/// One release of a movie in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    /// Certification.
    pub certification: String,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Note.
    pub note: String,
    /// Release timestamp.
    pub release_date: String,
    /// Release type (1 = premiere ... 6 = TV).
    #[serde(rename = "type")]
    pub release_type: u8,
}

/// Releases of a movie grouped by country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDates {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Releases.
    pub release_dates: Vec<ReleaseDate>,
}

/// Content rating of a series in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRating {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Rating.
    pub rating: String,
    /// Content descriptors.
    pub descriptors: Vec<String>,
}

/// Certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    /// Certification label.
    pub certification: String,
    /// Meaning.
    pub meaning: String,
    /// Sort order.
    pub order: i32,
}

/// External ids of a movie, series, season, episode or person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    /// TMDB ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Freebase MID.
    pub freebase_mid: Option<String>,
    /// Freebase ID.
    pub freebase_id: Option<String>,
    /// TVDB ID.
    pub tvdb_id: Option<u64>,
    /// `TVRage` ID.
    pub tvrage_id: Option<u64>,
    /// Wikidata ID.
    pub wikidata_id: Option<String>,
    /// Facebook ID.
    pub facebook_id: Option<String>,
    /// Instagram ID.
    pub instagram_id: Option<String>,
    /// Twitter ID.
    pub twitter_id: Option<String>,
}

/// Entry of a change list (`movie/changes`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeListItem {
    /// Changed resource ID.
    pub id: u64,
    /// Adult flag.
    pub adult: Option<bool>,
}

/// One change of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeItem {
    /// Change ID.
    pub id: String,
    /// Action (added, updated, deleted, ...).
    pub action: String,
    /// Timestamp.
    pub time: String,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// New value (shape depends on the key).
    pub value: serde_json::Value,
    /// Previous value.
    pub original_value: Option<serde_json::Value>,
}

/// Changes of one field of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeKey {
    /// Changed field.
    pub key: String,
    /// Change records.
    pub items: Vec<ChangeItem>,
}

/// Bare `{"results": [...]}` wrapper used by appended sub-resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results<T> {
    /// Items.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
