//! `tv/{id}/season/{n}` endpoints.

use super::Session;
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{AccountState, ExternalIds, Images, MediaCredits, Season, Video};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn season(series_id: u64, season_number: u32) -> ApiUrl {
    ApiUrl::new(Method::Tv).id(series_id).season(season_number)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches a season with its episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the season does not exist.
    pub async fn season_info(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
        append: &[&str],
    ) -> Result<Season> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::AppendToResponse, append);
        self.get_resource(season(series_id, season_number), params)
            .await
    }

    /// Account states of every episode in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn season_account_state(
        &self,
        series_id: u64,
        season_number: u32,
        session: &Session,
    ) -> Result<ResultList<AccountState>> {
        self.get_list(
            season(series_id, season_number).sub(SubMethod::AccountStates),
            session.params()?,
        )
        .await
    }

    /// Cast and crew of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn season_credits(&self, series_id: u64, season_number: u32) -> Result<MediaCredits> {
        self.get_object(
            season(series_id, season_number).sub(SubMethod::Credits),
            QueryParams::new(),
        )
        .await
    }

    /// External ids of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn season_external_ids(
        &self,
        series_id: u64,
        season_number: u32,
    ) -> Result<ExternalIds> {
        self.get_object(
            season(series_id, season_number).sub(SubMethod::ExternalIds),
            QueryParams::new(),
        )
        .await
    }

    /// Posters of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn season_images(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<Images> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_object(season(series_id, season_number).sub(SubMethod::Images), params)
            .await
    }

    /// Videos of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn season_videos(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<ResultList<Video>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_list(season(series_id, season_number).sub(SubMethod::Videos), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_season_info_path() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(include_str!(
                "../../../../fixtures/tmdb/tv_1399_season_1.json"
            )),
        )
        .unwrap();

        // Act
        let season = client.season_info(1399, 1, None, &[]).await.unwrap();

        // Assert
        assert_eq!(season.episodes.len(), 2);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/tv/1399/season/1?api_key=KEY"
        );
    }

    #[tokio::test]
    async fn test_season_zero_is_specials_not_missing() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":3627,"season_number":0,"name":"Specials","episodes":[]}"#),
        )
        .unwrap();

        // Act
        let season = client.season_info(1399, 0, None, &[]).await.unwrap();

        // Assert
        assert_eq!(season.season_number, 0);
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/tv/1399/season/0"
        );
    }

    #[tokio::test]
    async fn test_season_account_state() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":3624,"results":[{"id":63056,"rated":{"value":8.0}},{"id":63057,"rated":false}]}"#),
        )
        .unwrap();

        // Act
        let states = client
            .season_account_state(1399, 1, &Session::user("S1"))
            .await
            .unwrap();

        // Assert
        assert_eq!(states.len(), 2);
        assert_eq!(states.results.first().unwrap().rated, Some(8.0));
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/tv/1399/season/1/account_states"
        );
    }
}
