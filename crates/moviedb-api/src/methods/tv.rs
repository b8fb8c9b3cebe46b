//! `tv/*` series endpoints.

use chrono::NaiveDate;

use super::{Session, language_page, rating_body, validate_rating};
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{
    AccountState, AlternativeTitle, ChangeKey, ContentRating, ExternalIds, Images, Keyword,
    MediaCredits, StatusCode, Translation, TvBasic, TvInfo, Video,
};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn series(series_id: u64) -> ApiUrl {
    ApiUrl::new(Method::Tv).id(series_id)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches series details (`tv/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the series does not exist.
    pub async fn tv_info(
        &self,
        series_id: u64,
        language: Option<&str>,
        append: &[&str],
    ) -> Result<TvInfo> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::AppendToResponse, append);
        self.get_resource(series(series_id), params).await
    }

    /// Rating, favorite and watchlist state of a series for `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn tv_account_state(
        &self,
        series_id: u64,
        session: &Session,
    ) -> Result<AccountState> {
        self.get_object(series(series_id).sub(SubMethod::AccountStates), session.params()?)
            .await
    }

    /// Alternative titles (root `results`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_alternative_titles(
        &self,
        series_id: u64,
    ) -> Result<ResultList<AlternativeTitle>> {
        self.get_list(series(series_id).sub(SubMethod::AlternativeTitles), QueryParams::new())
            .await
    }

    /// Change history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_changes(
        &self,
        series_id: u64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeKey>> {
        let params = QueryParams::new()
            .with_opt(Param::StartDate, start_date)
            .with_opt(Param::EndDate, end_date)
            .with_opt(Param::Page, page);
        self.get_named_list(series(series_id).sub(SubMethod::Changes), params, "changes")
            .await
    }

    /// Content ratings per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_content_ratings(&self, series_id: u64) -> Result<ResultList<ContentRating>> {
        self.get_list(series(series_id).sub(SubMethod::ContentRatings), QueryParams::new())
            .await
    }

    /// Cast and crew of the latest season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_credits(&self, series_id: u64, language: Option<&str>) -> Result<MediaCredits> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_object(series(series_id).sub(SubMethod::Credits), params)
            .await
    }

    /// External ids (IMDb, TVDB, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_external_ids(&self, series_id: u64) -> Result<ExternalIds> {
        self.get_object(series(series_id).sub(SubMethod::ExternalIds), QueryParams::new())
            .await
    }

    /// Posters, backdrops and logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_images(
        &self,
        series_id: u64,
        language: Option<&str>,
        include_image_language: &[&str],
    ) -> Result<Images> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::IncludeImageLanguage, include_image_language);
        self.get_object(series(series_id).sub(SubMethod::Images), params)
            .await
    }

    /// Keywords (root `results`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_keywords(&self, series_id: u64) -> Result<ResultList<Keyword>> {
        self.get_list(series(series_id).sub(SubMethod::Keywords), QueryParams::new())
            .await
    }

    /// Recommended series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_recommendations(
        &self,
        series_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        self.get_list(
            series(series_id).sub(SubMethod::Recommendations),
            language_page(language, page),
        )
        .await
    }

    /// Similar series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn similar_tv(
        &self,
        series_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        self.get_list(series(series_id).sub(SubMethod::Similar), language_page(language, page))
            .await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_translations(&self, series_id: u64) -> Result<ResultList<Translation>> {
        self.get_named_list(
            series(series_id).sub(SubMethod::Translations),
            QueryParams::new(),
            "translations",
        )
        .await
    }

    /// Trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_videos(
        &self,
        series_id: u64,
        language: Option<&str>,
    ) -> Result<ResultList<Video>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_list(series(series_id).sub(SubMethod::Videos), params)
            .await
    }

    /// Rates a series; `value` must be within `[0, 10]`.
    ///
    /// # Errors
    ///
    /// Returns a validation error without sending anything when `value` is out
    /// of range or the session is blank, or an error if the request fails.
    pub async fn rate_tv(
        &self,
        series_id: u64,
        value: f64,
        session: &Session,
    ) -> Result<StatusCode> {
        validate_rating(value)?;
        self.post_object(
            series(series_id).sub(SubMethod::Rating),
            session.params()?,
            &rating_body(value),
        )
        .await
    }

    /// Removes the session's rating of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn delete_tv_rating(&self, series_id: u64, session: &Session) -> Result<StatusCode> {
        self.delete_object(series(series_id).sub(SubMethod::Rating), session.params()?)
            .await
    }

    /// The most recently added series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn latest_tv(&self, language: Option<&str>) -> Result<TvInfo> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_resource(ApiUrl::new(Method::Tv).sub(SubMethod::Latest), params)
            .await
    }

    /// Series with an episode airing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_airing_today(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        timezone: Option<&str>,
    ) -> Result<ResultList<TvBasic>> {
        let params = language_page(language, page).with_opt(Param::Timezone, timezone);
        self.get_list(ApiUrl::new(Method::Tv).sub(SubMethod::AiringToday), params)
            .await
    }

    /// Series airing in the next seven days.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_on_the_air(
        &self,
        language: Option<&str>,
        page: Option<u32>,
        timezone: Option<&str>,
    ) -> Result<ResultList<TvBasic>> {
        let params = language_page(language, page).with_opt(Param::Timezone, timezone);
        self.get_list(ApiUrl::new(Method::Tv).sub(SubMethod::OnTheAir), params)
            .await
    }

    /// Popular series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn popular_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        self.get_list(
            ApiUrl::new(Method::Tv).sub(SubMethod::Popular),
            language_page(language, page),
        )
        .await
    }

    /// Top rated series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn top_rated_tv(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        self.get_list(
            ApiUrl::new(Method::Tv).sub(SubMethod::TopRated),
            language_page(language, page),
        )
        .await
    }
}
