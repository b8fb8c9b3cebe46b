//! `find/{external_id}` lookup.

use std::fmt;

use crate::client::TmdbClient;
use crate::error::{MovieDbError, Result};
use crate::model::FindResults;
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method};

/// Database an external ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalSource {
    /// IMDb (`tt…` / `nm…`).
    ImdbId,
    /// Freebase MID.
    FreebaseMid,
    /// Freebase ID.
    FreebaseId,
    /// TheTVDB.
    TvdbId,
    /// TVRage.
    TvrageId,
    /// Wikidata.
    WikidataId,
    /// Facebook.
    FacebookId,
    /// Instagram.
    InstagramId,
    /// Twitter.
    TwitterId,
}

impl ExternalSource {
    /// Wire value of the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImdbId => "imdb_id",
            Self::FreebaseMid => "freebase_mid",
            Self::FreebaseId => "freebase_id",
            Self::TvdbId => "tvdb_id",
            Self::TvrageId => "tvrage_id",
            Self::WikidataId => "wikidata_id",
            Self::FacebookId => "facebook_id",
            Self::InstagramId => "instagram_id",
            Self::TwitterId => "twitter_id",
        }
    }
}

impl fmt::Display for ExternalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Finds movies, series, seasons, episodes and people by an external ID.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Validation`] without any request when
    /// `external_id` is blank, or an error if the request fails.
    pub async fn find(
        &self,
        external_id: &str,
        source: ExternalSource,
        language: Option<&str>,
    ) -> Result<FindResults> {
        let external_id = external_id.trim();
        if external_id.is_empty() {
            return Err(MovieDbError::validation("external id must not be blank"));
        }
        let params = QueryParams::new()
            .with(Param::ExternalSource, source.as_str())
            .with_opt(Param::Language, language);
        self.get_object(ApiUrl::new(Method::Find).id(external_id), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_find_by_imdb_id() {
        // Arrange
        let body = r#"{"movie_results":[{"id":603,"title":"The Matrix"}],"person_results":[],"tv_results":[],"tv_episode_results":[],"tv_season_results":[]}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let found = client
            .find("tt0133093", ExternalSource::ImdbId, None)
            .await
            .unwrap();

        // Assert
        assert!(!found.is_empty());
        assert_eq!(found.movie_results.first().unwrap().id, 603);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/find/tt0133093?api_key=KEY&external_source=imdb_id"
        );
    }

    #[tokio::test]
    async fn test_find_nothing() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body("{}")).unwrap();

        // Act
        let found = client
            .find("81189", ExternalSource::TvdbId, Some("en"))
            .await
            .unwrap();

        // Assert
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_blank_id_sends_nothing() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::default()).unwrap();

        // Act
        let err = client
            .find(" ", ExternalSource::ImdbId, None)
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(client.transport().requests().is_empty());
    }
}
