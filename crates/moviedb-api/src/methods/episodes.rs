//! `tv/{id}/season/{n}/episode/{m}` endpoints.

use super::{Session, rating_body, validate_rating};
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{AccountState, Episode, ExternalIds, Images, MediaCredits, StatusCode, Video};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn episode(series_id: u64, season_number: u32, episode_number: u32) -> ApiUrl {
    ApiUrl::new(Method::Tv)
        .id(series_id)
        .season(season_number)
        .episode(episode_number)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches one episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the episode does not exist.
    pub async fn episode_info(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
        append: &[&str],
    ) -> Result<Episode> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::AppendToResponse, append);
        self.get_resource(episode(series_id, season_number, episode_number), params)
            .await
    }

    /// Rating state of an episode for `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn episode_account_state(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        session: &Session,
    ) -> Result<AccountState> {
        self.get_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::AccountStates),
            session.params()?,
        )
        .await
    }

    /// Cast, crew and guest stars of an episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn episode_credits(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<MediaCredits> {
        self.get_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::Credits),
            QueryParams::new(),
        )
        .await
    }

    /// External ids of an episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn episode_external_ids(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<ExternalIds> {
        self.get_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::ExternalIds),
            QueryParams::new(),
        )
        .await
    }

    /// Stills of an episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn episode_images(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<Images> {
        self.get_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::Images),
            QueryParams::new(),
        )
        .await
    }

    /// Videos of an episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn episode_videos(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
    ) -> Result<ResultList<Video>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_list(
            episode(series_id, season_number, episode_number).sub(SubMethod::Videos),
            params,
        )
        .await
    }

    /// Rates an episode; `value` must be within `[0, 10]`.
    ///
    /// # Errors
    ///
    /// Returns a validation error without sending anything when `value` is out
    /// of range or the session is blank, or an error if the request fails.
    pub async fn rate_episode(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        value: f64,
        session: &Session,
    ) -> Result<StatusCode> {
        validate_rating(value)?;
        self.post_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::Rating),
            session.params()?,
            &rating_body(value),
        )
        .await
    }

    /// Removes the session's rating of an episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn delete_episode_rating(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        session: &Session,
    ) -> Result<StatusCode> {
        self.delete_object(
            episode(series_id, season_number, episode_number).sub(SubMethod::Rating),
            session.params()?,
        )
        .await
    }
}
