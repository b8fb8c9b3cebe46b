//! `search/*` endpoints and their parameter builders.

use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::{MovieDbError, Result};
use crate::model::{
    CollectionBasic, Company, Keyword, MovieBasic, MultiResult, PersonBasic, TvBasic,
};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

/// Parameters for `search/movie`.
#[derive(Debug, Clone)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Filter by year.
    pub year: Option<u32>,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            primary_release_year: None,
            year: None,
            region: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Includes adult results.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = include;
        self
    }

    fn to_params(&self) -> Result<QueryParams> {
        let mut params = query_params(&self.query)?;
        params
            .add(Param::Language, &self.language)
            .add(Param::Page, self.page)
            .add(Param::IncludeAdult, self.include_adult)
            .add_opt(Param::PrimaryReleaseYear, self.primary_release_year)
            .add_opt(Param::Year, self.year)
            .add_opt(Param::Region, self.region.as_deref());
        Ok(params)
    }
}

/// Parameters for `search/tv`.
#[derive(Debug, Clone)]
pub struct SearchTvParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by first air date year.
    pub first_air_date_year: Option<u32>,
    /// Filter by year (searches first air date and episode air dates).
    pub year: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchTvParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            first_air_date_year: None,
            year: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the first air date year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    fn to_params(&self) -> Result<QueryParams> {
        let mut params = query_params(&self.query)?;
        params
            .add(Param::Language, &self.language)
            .add(Param::Page, self.page)
            .add(Param::IncludeAdult, self.include_adult)
            .add_opt(Param::FirstAirDateYear, self.first_air_date_year)
            .add_opt(Param::Year, self.year);
        Ok(params)
    }
}

/// Parameters for the simpler searches (person, company, collection, keyword, multi).
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Response language.
    pub language: Option<String>,
    /// Result page.
    pub page: Option<u32>,
    /// Include adult content (person and multi only).
    pub include_adult: Option<bool>,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            page: None,
            include_adult: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Includes or excludes adult results.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    fn to_params(&self) -> Result<QueryParams> {
        let mut params = query_params(&self.query)?;
        params
            .add_opt(Param::Language, self.language.as_deref())
            .add_opt(Param::Page, self.page)
            .add_opt(Param::IncludeAdult, self.include_adult);
        Ok(params)
    }
}

/// Starts a parameter set with the mandatory query.
fn query_params(query: &str) -> Result<QueryParams> {
    if query.trim().is_empty() {
        return Err(MovieDbError::validation("search query must not be blank"));
    }
    Ok(QueryParams::new().with(Param::Query, query))
}

fn search(kind: SubMethod) -> ApiUrl {
    ApiUrl::new(Method::Search).sub(kind)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Searches movies by title.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_movie(&self, params: &SearchMovieParams) -> Result<ResultList<MovieBasic>> {
        self.get_list(search(SubMethod::Movie), params.to_params()?)
            .await
    }

    /// Searches TV series by name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_tv(&self, params: &SearchTvParams) -> Result<ResultList<TvBasic>> {
        self.get_list(search(SubMethod::Tv), params.to_params()?)
            .await
    }

    /// Searches people by name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_person(&self, params: &SearchParams) -> Result<ResultList<PersonBasic>> {
        self.get_list(search(SubMethod::Person), params.to_params()?)
            .await
    }

    /// Searches companies by name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_company(&self, params: &SearchParams) -> Result<ResultList<Company>> {
        self.get_list(search(SubMethod::Company), params.to_params()?)
            .await
    }

    /// Searches collections by name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_collection(
        &self,
        params: &SearchParams,
    ) -> Result<ResultList<CollectionBasic>> {
        self.get_list(search(SubMethod::Collection), params.to_params()?)
            .await
    }

    /// Searches keywords.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_keyword(&self, params: &SearchParams) -> Result<ResultList<Keyword>> {
        self.get_list(search(SubMethod::Keyword), params.to_params()?)
            .await
    }

    /// Searches movies, series and people at once.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query, or an error if the request fails.
    pub async fn search_multi(&self, params: &SearchParams) -> Result<ResultList<MultiResult>> {
        self.get_list(search(SubMethod::Multi), params.to_params()?)
            .await
    }
}
