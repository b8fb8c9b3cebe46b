//! `keyword/*` endpoints.

use super::language_page;
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{Keyword, MovieBasic};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

impl<T: HttpTransport> TmdbClient<T> {
    /// Keyword name by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the keyword does not exist.
    pub async fn keyword(&self, keyword_id: u64) -> Result<Keyword> {
        self.get_resource(ApiUrl::new(Method::Keyword).id(keyword_id), QueryParams::new())
            .await
    }

    /// Movies tagged with a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn keyword_movies(
        &self,
        keyword_id: u64,
        language: Option<&str>,
        page: Option<u32>,
        include_adult: Option<bool>,
    ) -> Result<ResultList<MovieBasic>> {
        let params = language_page(language, page).with_opt(Param::IncludeAdult, include_adult);
        self.get_list(
            ApiUrl::new(Method::Keyword)
                .id(keyword_id)
                .sub(SubMethod::Movies),
            params,
        )
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
    async fn test_keyword() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":310,"name":"artificial intelligence"}"#),
        )
        .unwrap();

        // Act
        let keyword = client.keyword(310).await.unwrap();

        // Assert
        assert_eq!(keyword.name, "artificial intelligence");
    }

    #[tokio::test]
    async fn test_unknown_keyword_is_not_found() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body("")).unwrap();

        // Act
        let err = client.keyword(0).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_keyword_movies_url() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":310,"page":1,"results":[{"id":603}],"total_pages":1,"total_results":1}"#),
        )
        .unwrap();

        // Act
        let movies = client
            .keyword_movies(310, Some("en"), None, Some(false))
            .await
            .unwrap();

        // Assert
        assert_eq!(movies.len(), 1);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/keyword/310/movies?api_key=KEY&language=en&include_adult=false"
        );
    }
}
