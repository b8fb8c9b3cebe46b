//! `movie/*` endpoints.

use chrono::NaiveDate;

use super::{Session, language_page, rating_body, validate_rating};
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{
    AccountState, AlternativeTitle, ChangeKey, ExternalIds, Images, Keyword, MediaCredits,
    MovieBasic, MovieInfo, ReleaseDates, Review, StatusCode, Translation, UserList, Video,
};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn movie(movie_id: u64) -> ApiUrl {
    ApiUrl::new(Method::Movie).id(movie_id)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches movie details (`movie/{id}`).
    ///
    /// `append` names sub-resources (e.g. `credits`, `images`) embedded in the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the movie does not exist.
    pub async fn movie_info(
        &self,
        movie_id: u64,
        language: Option<&str>,
        append: &[&str],
    ) -> Result<MovieInfo> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::AppendToResponse, append);
        self.get_resource(movie(movie_id), params).await
    }

    /// Rating, favorite and watchlist state of a movie for `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn movie_account_state(
        &self,
        movie_id: u64,
        session: &Session,
    ) -> Result<AccountState> {
        self.get_object(movie(movie_id).sub(SubMethod::AccountStates), session.params()?)
            .await
    }

    /// Alternative titles, optionally for one country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
    ) -> Result<ResultList<AlternativeTitle>> {
        let params = QueryParams::new().with_opt(Param::Country, country);
        self.get_named_list(movie(movie_id).sub(SubMethod::AlternativeTitles), params, "titles")
            .await
    }

    /// Cast and crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_credits(&self, movie_id: u64) -> Result<MediaCredits> {
        self.get_object(movie(movie_id).sub(SubMethod::Credits), QueryParams::new())
            .await
    }

    /// External ids (IMDb, Wikidata, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_external_ids(&self, movie_id: u64) -> Result<ExternalIds> {
        self.get_object(movie(movie_id).sub(SubMethod::ExternalIds), QueryParams::new())
            .await
    }

    /// Posters, backdrops and logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_images(
        &self,
        movie_id: u64,
        language: Option<&str>,
        include_image_language: &[&str],
    ) -> Result<Images> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::IncludeImageLanguage, include_image_language);
        self.get_object(movie(movie_id).sub(SubMethod::Images), params)
            .await
    }

    /// Keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_keywords(&self, movie_id: u64) -> Result<ResultList<Keyword>> {
        self.get_named_list(
            movie(movie_id).sub(SubMethod::Keywords),
            QueryParams::new(),
            "keywords",
        )
        .await
    }

    /// Release dates and certifications per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_release_dates(&self, movie_id: u64) -> Result<ResultList<ReleaseDates>> {
        self.get_list(movie(movie_id).sub(SubMethod::ReleaseDates), QueryParams::new())
            .await
    }

    /// Trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_videos(
        &self,
        movie_id: u64,
        language: Option<&str>,
    ) -> Result<ResultList<Video>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_list(movie(movie_id).sub(SubMethod::Videos), params)
            .await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_translations(&self, movie_id: u64) -> Result<ResultList<Translation>> {
        self.get_named_list(
            movie(movie_id).sub(SubMethod::Translations),
            QueryParams::new(),
            "translations",
        )
        .await
    }

    /// Recommended movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_recommendations(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        self.get_list(
            movie(movie_id).sub(SubMethod::Recommendations),
            language_page(language, page),
        )
        .await
    }

    /// Similar movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn similar_movies(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        self.get_list(movie(movie_id).sub(SubMethod::Similar), language_page(language, page))
            .await
    }

    /// User reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_reviews(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<Review>> {
        self.get_list(movie(movie_id).sub(SubMethod::Reviews), language_page(language, page))
            .await
    }

    /// User lists containing the movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_lists(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<UserList>> {
        self.get_list(movie(movie_id).sub(SubMethod::Lists), language_page(language, page))
            .await
    }

    /// Change history, at most 14 days per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_changes(
        &self,
        movie_id: u64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeKey>> {
        let params = QueryParams::new()
            .with_opt(Param::StartDate, start_date)
            .with_opt(Param::EndDate, end_date)
            .with_opt(Param::Page, page);
        self.get_named_list(movie(movie_id).sub(SubMethod::Changes), params, "changes")
            .await
    }

    /// Rates a movie; `value` must be within `[0, 10]`.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Validation`](crate::MovieDbError::Validation)
    /// without sending anything when `value` is out of range or the session is
    /// blank, or an error if the request fails.
    pub async fn rate_movie(
        &self,
        movie_id: u64,
        value: f64,
        session: &Session,
    ) -> Result<StatusCode> {
        validate_rating(value)?;
        self.post_object(
            movie(movie_id).sub(SubMethod::Rating),
            session.params()?,
            &rating_body(value),
        )
        .await
    }

    /// Removes the session's rating of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn delete_movie_rating(
        &self,
        movie_id: u64,
        session: &Session,
    ) -> Result<StatusCode> {
        self.delete_object(movie(movie_id).sub(SubMethod::Rating), session.params()?)
            .await
    }

    /// The most recently added movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn latest_movie(&self, language: Option<&str>) -> Result<MovieInfo> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_resource(ApiUrl::new(Method::Movie).sub(SubMethod::Latest), params)
            .await
    }

    /// Movies in theatres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn now_playing_movies(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        region: Option<&str>,
    ) -> Result<ResultList<MovieBasic>> {
        self.movie_chart(SubMethod::NowPlaying, language, page, region)
            .await
    }

    /// Popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn popular_movies(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        region: Option<&str>,
    ) -> Result<ResultList<MovieBasic>> {
        self.movie_chart(SubMethod::Popular, language, page, region)
            .await
    }

    /// Top rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn top_rated_movies(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        region: Option<&str>,
    ) -> Result<ResultList<MovieBasic>> {
        self.movie_chart(SubMethod::TopRated, language, page, region)
            .await
    }

    /// Upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn upcoming_movies(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        region: Option<&str>,
    ) -> Result<ResultList<MovieBasic>> {
        self.movie_chart(SubMethod::Upcoming, language, page, region)
            .await
    }

    async fn movie_chart(
        &self,
        chart: SubMethod,
        language: Option<&str>,
        page: Option<u32>,
        region: Option<&str>,
    ) -> Result<ResultList<MovieBasic>> {
        let params = language_page(language, page).with_opt(Param::Region, region);
        self.get_list(ApiUrl::new(Method::Movie).sub(chart), params)
            .await
    }
}
