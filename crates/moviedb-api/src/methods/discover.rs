//! `discover/*` endpoints and their filter builder.

use std::fmt;

use chrono::NaiveDate;

use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{MovieBasic, TvBasic};
use crate::params::{Param, ParamValue, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

/// Sort order accepted by the discover endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// `popularity.asc`
    PopularityAsc,
    /// `popularity.desc` (vendor default)
    PopularityDesc,
    /// `release_date.asc`
    ReleaseDateAsc,
    /// `release_date.desc`
    ReleaseDateDesc,
    /// `primary_release_date.asc` (movies)
    PrimaryReleaseDateAsc,
    /// `primary_release_date.desc` (movies)
    PrimaryReleaseDateDesc,
    /// `first_air_date.asc` (series)
    FirstAirDateAsc,
    /// `first_air_date.desc` (series)
    FirstAirDateDesc,
    /// `revenue.asc`
    RevenueAsc,
    /// `revenue.desc`
    RevenueDesc,
    /// `original_title.asc`
    OriginalTitleAsc,
    /// `original_title.desc`
    OriginalTitleDesc,
    /// `vote_average.asc`
    VoteAverageAsc,
    /// `vote_average.desc`
    VoteAverageDesc,
    /// `vote_count.asc`
    VoteCountAsc,
    /// `vote_count.desc`
    VoteCountDesc,
}

impl SortBy {
    /// Wire value of the sort order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopularityAsc => "popularity.asc",
            Self::PopularityDesc => "popularity.desc",
            Self::ReleaseDateAsc => "release_date.asc",
            Self::ReleaseDateDesc => "release_date.desc",
            Self::PrimaryReleaseDateAsc => "primary_release_date.asc",
            Self::PrimaryReleaseDateDesc => "primary_release_date.desc",
            Self::FirstAirDateAsc => "first_air_date.asc",
            Self::FirstAirDateDesc => "first_air_date.desc",
            Self::RevenueAsc => "revenue.asc",
            Self::RevenueDesc => "revenue.desc",
            Self::OriginalTitleAsc => "original_title.asc",
            Self::OriginalTitleDesc => "original_title.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteCountAsc => "vote_count.asc",
            Self::VoteCountDesc => "vote_count.desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `discover/movie` and `discover/tv`.
///
/// Each setter stores one query parameter; filters that only apply to the
/// other media kind are ignored by the vendor.
///
/// ```
/// use moviedb_api::{Discover, SortBy};
///
/// let filters = Discover::new()
///     .sort_by(SortBy::VoteAverageDesc)
///     .with_genres(&[28, 878])
///     .vote_count_gte(500)
///     .page(2);
/// assert_eq!(filters.params().get(moviedb_api::Param::WithGenres), Some("28,878"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discover {
    params: QueryParams,
}

impl Discover {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    fn set(mut self, param: Param, value: impl Into<ParamValue>) -> Self {
        self.params.add(param, value);
        self
    }

    /// Result language.
    #[must_use]
    pub fn language(self, language: &str) -> Self {
        self.set(Param::Language, language)
    }

    /// Result page.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.set(Param::Page, page)
    }

    /// Sort order.
    #[must_use]
    pub fn sort_by(self, sort_by: SortBy) -> Self {
        self.set(Param::SortBy, sort_by.as_str())
    }

    /// Region for release dates.
    #[must_use]
    pub fn region(self, region: &str) -> Self {
        self.set(Param::Region, region)
    }

    /// Include adult titles.
    #[must_use]
    pub fn include_adult(self, include: bool) -> Self {
        self.set(Param::IncludeAdult, include)
    }

    /// Include video-only titles.
    #[must_use]
    pub fn include_video(self, include: bool) -> Self {
        self.set(Param::IncludeVideo, include)
    }

    /// Release year of any release.
    #[must_use]
    pub fn year(self, year: u32) -> Self {
        self.set(Param::Year, year)
    }

    /// Primary release year.
    #[must_use]
    pub fn primary_release_year(self, year: u32) -> Self {
        self.set(Param::PrimaryReleaseYear, year)
    }

    /// Primary release on or after `date`.
    #[must_use]
    pub fn primary_release_date_gte(self, date: NaiveDate) -> Self {
        self.set(Param::PrimaryReleaseDateGte, date)
    }

    /// Primary release on or before `date`.
    #[must_use]
    pub fn primary_release_date_lte(self, date: NaiveDate) -> Self {
        self.set(Param::PrimaryReleaseDateLte, date)
    }

    /// Any release on or after `date`.
    #[must_use]
    pub fn release_date_gte(self, date: NaiveDate) -> Self {
        self.set(Param::ReleaseDateGte, date)
    }

    /// Any release on or before `date`.
    #[must_use]
    pub fn release_date_lte(self, date: NaiveDate) -> Self {
        self.set(Param::ReleaseDateLte, date)
    }

    /// First air year of a series.
    #[must_use]
    pub fn first_air_date_year(self, year: u32) -> Self {
        self.set(Param::FirstAirDateYear, year)
    }

    /// First aired on or after `date`.
    #[must_use]
    pub fn first_air_date_gte(self, date: NaiveDate) -> Self {
        self.set(Param::FirstAirDateGte, date)
    }

    /// First aired on or before `date`.
    #[must_use]
    pub fn first_air_date_lte(self, date: NaiveDate) -> Self {
        self.set(Param::FirstAirDateLte, date)
    }

    /// Include series without a first air date.
    #[must_use]
    pub fn include_null_first_air_dates(self, include: bool) -> Self {
        self.set(Param::IncludeNullFirstAirDates, include)
    }

    /// Timezone used with the air date filters.
    #[must_use]
    pub fn timezone(self, timezone: &str) -> Self {
        self.set(Param::Timezone, timezone)
    }

    /// Country the certification filters refer to.
    #[must_use]
    pub fn certification_country(self, country: &str) -> Self {
        self.set(Param::CertificationCountry, country)
    }

    /// Exact certification.
    #[must_use]
    pub fn certification(self, certification: &str) -> Self {
        self.set(Param::Certification, certification)
    }

    /// Certification at most `certification`.
    #[must_use]
    pub fn certification_lte(self, certification: &str) -> Self {
        self.set(Param::CertificationLte, certification)
    }

    /// Minimum number of votes.
    #[must_use]
    pub fn vote_count_gte(self, count: u32) -> Self {
        self.set(Param::VoteCountGte, count)
    }

    /// Minimum vote average.
    #[must_use]
    pub fn vote_average_gte(self, average: f64) -> Self {
        self.set(Param::VoteAverageGte, average)
    }

    /// Maximum vote average.
    #[must_use]
    pub fn vote_average_lte(self, average: f64) -> Self {
        self.set(Param::VoteAverageLte, average)
    }

    /// Minimum runtime in minutes.
    #[must_use]
    pub fn with_runtime_gte(self, minutes: u32) -> Self {
        self.set(Param::WithRuntimeGte, minutes)
    }

    /// Maximum runtime in minutes.
    #[must_use]
    pub fn with_runtime_lte(self, minutes: u32) -> Self {
        self.set(Param::WithRuntimeLte, minutes)
    }

    /// Original language (ISO 639-1).
    #[must_use]
    pub fn with_original_language(self, language: &str) -> Self {
        self.set(Param::WithOriginalLanguage, language)
    }

    /// Titles with all of these genres.
    #[must_use]
    pub fn with_genres(self, genre_ids: &[u64]) -> Self {
        self.set(Param::WithGenres, genre_ids)
    }

    /// Titles without any of these genres.
    #[must_use]
    pub fn without_genres(self, genre_ids: &[u64]) -> Self {
        self.set(Param::WithoutGenres, genre_ids)
    }

    /// Titles tagged with all of these keywords.
    #[must_use]
    pub fn with_keywords(self, keyword_ids: &[u64]) -> Self {
        self.set(Param::WithKeywords, keyword_ids)
    }

    /// Titles not tagged with any of these keywords.
    #[must_use]
    pub fn without_keywords(self, keyword_ids: &[u64]) -> Self {
        self.set(Param::WithoutKeywords, keyword_ids)
    }

    /// Movies featuring all of these cast members.
    #[must_use]
    pub fn with_cast(self, person_ids: &[u64]) -> Self {
        self.set(Param::WithCast, person_ids)
    }

    /// Movies with all of these crew members.
    #[must_use]
    pub fn with_crew(self, person_ids: &[u64]) -> Self {
        self.set(Param::WithCrew, person_ids)
    }

    /// Movies with all of these people in any role.
    #[must_use]
    pub fn with_people(self, person_ids: &[u64]) -> Self {
        self.set(Param::WithPeople, person_ids)
    }

    /// Titles produced by all of these companies.
    #[must_use]
    pub fn with_companies(self, company_ids: &[u64]) -> Self {
        self.set(Param::WithCompanies, company_ids)
    }

    /// Series aired on all of these networks.
    #[must_use]
    pub fn with_networks(self, network_ids: &[u64]) -> Self {
        self.set(Param::WithNetworks, network_ids)
    }
}

impl From<Discover> for QueryParams {
    fn from(discover: Discover) -> Self {
        discover.params
    }
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Movies matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn discover_movies(&self, filters: &Discover) -> Result<ResultList<MovieBasic>> {
        self.get_list(
            ApiUrl::new(Method::Discover).sub(SubMethod::Movie),
            filters.params.clone(),
        )
        .await
    }

    /// Series matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn discover_tv(&self, filters: &Discover) -> Result<ResultList<TvBasic>> {
        self.get_list(
            ApiUrl::new(Method::Discover).sub(SubMethod::Tv),
            filters.params.clone(),
        )
        .await
    }
}
