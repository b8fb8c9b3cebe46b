//! `genre/*` endpoints.

use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::Genre;
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

const ROOT: &str = "genres";

impl<T: HttpTransport> TmdbClient<T> {
    /// Official movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn genre_movie_list(&self, language: Option<&str>) -> Result<Vec<Genre>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        let genres = self
            .get_named_list(ApiUrl::new(Method::Genre).sub(SubMethod::MovieList), params, ROOT)
            .await?;
        Ok(genres.results)
    }

    /// Official series genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn genre_tv_list(&self, language: Option<&str>) -> Result<Vec<Genre>> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        let genres = self
            .get_named_list(ApiUrl::new(Method::Genre).sub(SubMethod::TvList), params, ROOT)
            .await?;
        Ok(genres.results)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_genre_movie_list() {
        // Arrange
        let body = r#"{"genres":[{"id":28,"name":"Action"},{"id":12,"name":"Adventure"}]}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let genres = client.genre_movie_list(Some("en-US")).await.unwrap();

        // Assert
        assert_eq!(genres.len(), 2);
        assert_eq!(genres.first().unwrap().name, "Action");
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/genre/movie/list?api_key=KEY&language=en-US"
        );
    }

    #[tokio::test]
    async fn test_genre_tv_list_missing_root_is_empty() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body("{}")).unwrap();

        // Act
        let genres = client.genre_tv_list(None).await.unwrap();

        // Assert
        assert!(genres.is_empty());
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/genre/tv/list"
        );
    }
}
