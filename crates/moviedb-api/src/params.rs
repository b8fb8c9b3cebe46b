//! Query parameter names and the ordered parameter container.

use chrono::NaiveDate;

/// Delimiter used when a list value is flattened into one parameter.
const LIST_DELIMITER: &str = ",";

/// Query parameter names recognised by the TMDB API.
///
/// `api_key` is deliberately absent: the URL builder always injects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Param {
    AppendToResponse,
    Certification,
    CertificationCountry,
    CertificationLte,
    Confirm,
    Country,
    EndDate,
    ExternalSource,
    FirstAirDateGte,
    FirstAirDateLte,
    FirstAirDateYear,
    GuestSessionId,
    IncludeAdult,
    IncludeImageLanguage,
    IncludeNullFirstAirDates,
    IncludeVideo,
    Language,
    MovieId,
    Page,
    PrimaryReleaseDateGte,
    PrimaryReleaseDateLte,
    PrimaryReleaseYear,
    Query,
    Region,
    ReleaseDateGte,
    ReleaseDateLte,
    SessionId,
    SortBy,
    StartDate,
    Timezone,
    VoteAverageGte,
    VoteAverageLte,
    VoteCountGte,
    WithCast,
    WithCompanies,
    WithCrew,
    WithGenres,
    WithKeywords,
    WithNetworks,
    WithOriginalLanguage,
    WithPeople,
    WithRuntimeGte,
    WithRuntimeLte,
    WithoutGenres,
    WithoutKeywords,
    Year,
}

impl Param {
    /// Returns the wire name of the parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppendToResponse => "append_to_response",
            Self::Certification => "certification",
            Self::CertificationCountry => "certification_country",
            Self::CertificationLte => "certification.lte",
            Self::Confirm => "confirm",
            Self::Country => "country",
            Self::EndDate => "end_date",
            Self::ExternalSource => "external_source",
            Self::FirstAirDateGte => "first_air_date.gte",
            Self::FirstAirDateLte => "first_air_date.lte",
            Self::FirstAirDateYear => "first_air_date_year",
            Self::GuestSessionId => "guest_session_id",
            Self::IncludeAdult => "include_adult",
            Self::IncludeImageLanguage => "include_image_language",
            Self::IncludeNullFirstAirDates => "include_null_first_air_dates",
            Self::IncludeVideo => "include_video",
            Self::Language => "language",
            Self::MovieId => "movie_id",
            Self::Page => "page",
            Self::PrimaryReleaseDateGte => "primary_release_date.gte",
            Self::PrimaryReleaseDateLte => "primary_release_date.lte",
            Self::PrimaryReleaseYear => "primary_release_year",
            Self::Query => "query",
            Self::Region => "region",
            Self::ReleaseDateGte => "release_date.gte",
            Self::ReleaseDateLte => "release_date.lte",
            Self::SessionId => "session_id",
            Self::SortBy => "sort_by",
            Self::StartDate => "start_date",
            Self::Timezone => "timezone",
            Self::VoteAverageGte => "vote_average.gte",
            Self::VoteAverageLte => "vote_average.lte",
            Self::VoteCountGte => "vote_count.gte",
            Self::WithCast => "with_cast",
            Self::WithCompanies => "with_companies",
            Self::WithCrew => "with_crew",
            Self::WithGenres => "with_genres",
            Self::WithKeywords => "with_keywords",
            Self::WithNetworks => "with_networks",
            Self::WithOriginalLanguage => "with_original_language",
            Self::WithPeople => "with_people",
            Self::WithRuntimeGte => "with_runtime.gte",
            Self::WithRuntimeLte => "with_runtime.lte",
            Self::WithoutGenres => "without_genres",
            Self::WithoutKeywords => "without_keywords",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can be stored in [`QueryParams`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free text; dropped when blank.
    Text(String),
    /// Integer; dropped when not positive.
    Number(i64),
    /// Decimal; dropped when not positive or not finite.
    Decimal(f64),
    /// Boolean flag; always kept.
    Flag(bool),
    /// List joined with `,`; blank elements are removed, dropped when nothing remains.
    List(Vec<String>),
}

impl ParamValue {
    /// Renders the value for the query string, or `None` when it must be omitted.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| String::from(trimmed))
            }
            Self::Number(n) => (*n > 0).then(|| n.to_string()),
            Self::Decimal(d) => (d.is_finite() && *d > 0.0).then(|| d.to_string()),
            Self::Flag(b) => Some(b.to_string()),
            Self::List(items) => {
                let kept: Vec<&str> = items
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                (!kept.is_empty()).then(|| kept.join(LIST_DELIMITER))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| String::from(*s)).collect())
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

impl From<&[u64]> for ParamValue {
    fn from(value: &[u64]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

/// Ordered query parameter container.
///
/// Holds at most one value per [`Param`]. Values that render to nothing
/// (blank text, non-positive numbers, empty lists) are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(Param, String)>,
}

impl QueryParams {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores `value` under `param`, replacing any previous value in place.
    ///
    /// A value that renders to nothing is ignored and leaves an existing entry untouched.
    pub fn add(&mut self, param: Param, value: impl Into<ParamValue>) -> &mut Self {
        if let Some(rendered) = value.into().render() {
            if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == param) {
                entry.1 = rendered;
            } else {
                self.entries.push((param, rendered));
            }
        }
        self
    }

    /// Like [`Self::add`], but skips `None`.
    pub fn add_opt<V: Into<ParamValue>>(&mut self, param: Param, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.add(param, v);
        }
        self
    }

    /// Builder-style [`Self::add`].
    #[must_use]
    pub fn with(mut self, param: Param, value: impl Into<ParamValue>) -> Self {
        self.add(param, value);
        self
    }

    /// Builder-style [`Self::add_opt`].
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, param: Param, value: Option<V>) -> Self {
        self.add_opt(param, value);
        self
    }

    /// Returns the stored value for `param`.
    #[must_use]
    pub fn get(&self, param: Param) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when `param` has a value.
    #[must_use]
    pub fn has(&self, param: Param) -> bool {
        self.get(param).is_some()
    }

    /// Number of stored parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameter is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_blank_text_is_dropped() {
        // Arrange
        let mut params = QueryParams::new();

        // Act
        params.add(Param::Language, "").add(Param::Query, "   ");

        // Assert
        assert!(params.is_empty());
    }

    #[test]
    fn test_none_is_dropped() {
        // Arrange
        let mut params = QueryParams::new();

        // Act
        params.add_opt::<&str>(Param::Language, None);
        params.add_opt(Param::Page, None::<u32>);

        // Assert
        assert!(params.is_empty());
    }

    #[test]
    fn test_non_positive_numbers_are_dropped() {
        // Arrange
        let mut params = QueryParams::new();

        // Act
        params
            .add(Param::Page, 0_u32)
            .add(Param::Year, -1_i32)
            .add(Param::VoteAverageGte, 0.0_f64)
            .add(Param::VoteAverageLte, f64::NAN);

        // Assert
        assert!(params.is_empty());
    }

    #[test]
    fn test_flags_are_always_kept() {
        // Arrange
        let mut params = QueryParams::new();

        // Act
        params.add(Param::IncludeAdult, false);

        // Assert
        assert_eq!(params.get(Param::IncludeAdult), Some("false"));
    }

    #[test]
    fn test_readding_replaces_value_in_place() {
        // Arrange
        let mut params = QueryParams::new();
        params.add(Param::Language, "en-US").add(Param::Page, 2_u32);

        // Act
        params.add(Param::Language, "de-DE");

        // Assert
        let collected: Vec<(Param, &str)> = params.iter().collect();
        assert_eq!(
            collected,
            vec![(Param::Language, "de-DE"), (Param::Page, "2")]
        );
    }

    #[test]
    fn test_blank_value_does_not_clear_existing() {
        // Arrange
        let mut params = QueryParams::new();
        params.add(Param::Language, "en-US");

        // Act
        params.add(Param::Language, "");

        // Assert
        assert_eq!(params.get(Param::Language), Some("en-US"));
    }

    #[test]
    fn test_list_is_joined_with_comma() {
        // Arrange
        let mut params = QueryParams::new();
        let append: &[&str] = &["credits", "", "images", " videos "];

        // Act
        params.add(Param::AppendToResponse, append);

        // Assert
        assert_eq!(
            params.get(Param::AppendToResponse),
            Some("credits,images,videos")
        );
    }

    #[test]
    fn test_empty_list_is_dropped() {
        // Arrange
        let mut params = QueryParams::new();
        let append: &[&str] = &["", " "];

        // Act
        params.add(Param::AppendToResponse, append);

        // Assert
        assert!(!params.has(Param::AppendToResponse));
    }

    #[test]
    fn test_date_is_formatted() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        // Act
        let params = QueryParams::new().with(Param::StartDate, date);

        // Assert
        assert_eq!(params.get(Param::StartDate), Some("2024-03-09"));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        // Arrange & Act
        let params = QueryParams::new()
            .with(Param::Page, 3_u32)
            .with(Param::Language, "fr")
            .with(Param::AppendToResponse, vec![String::from("credits")]);

        // Assert
        let names: Vec<&str> = params.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["page", "language", "append_to_response"]);
    }

    #[test]
    fn test_decimal_rendering() {
        // Arrange & Act
        let params = QueryParams::new().with(Param::VoteAverageGte, 7.5_f64);

        // Assert
        assert_eq!(params.get(Param::VoteAverageGte), Some("7.5"));
    }
}
