//! `certification/*` endpoints.

use std::collections::BTreeMap;

use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::Certification;
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

const ROOT: &str = "certifications";

impl<T: HttpTransport> TmdbClient<T> {
    /// Movie certifications keyed by country code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_certifications(&self) -> Result<BTreeMap<String, Vec<Certification>>> {
        self.get_map(
            ApiUrl::new(Method::Certification).sub(SubMethod::MovieList),
            QueryParams::new(),
            ROOT,
        )
        .await
    }

    /// Series certifications keyed by country code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_certifications(&self) -> Result<BTreeMap<String, Vec<Certification>>> {
        self.get_map(
            ApiUrl::new(Method::Certification).sub(SubMethod::TvList),
            QueryParams::new(),
            ROOT,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_movie_certifications() {
        // Arrange
        let body = r#"{"certifications":{"US":[{"certification":"R","meaning":"Restricted","order":4}],"JP":[{"certification":"G","meaning":"","order":1}]}}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let certifications = client.movie_certifications().await.unwrap();

        // Assert
        assert_eq!(certifications.len(), 2);
        assert_eq!(certifications.get("US").unwrap().first().unwrap().order, 4);
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/certification/movie/list"
        );
    }

    #[tokio::test]
    async fn test_tv_certifications_path() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"certifications":{}}"#),
        )
        .unwrap();

        // Act
        let certifications = client.tv_certifications().await.unwrap();

        // Assert
        assert!(certifications.is_empty());
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/certification/tv/list"
        );
    }
}
