//! `review/{review_id}`.

use super::require_id;
use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::Review;
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method};

impl<T: HttpTransport> TmdbClient<T> {
    /// A single review with the reviewed media.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank `review_id`, or an error if the
    /// request fails or the review does not exist.
    pub async fn review(&self, review_id: &str) -> Result<Review> {
        let review = ApiUrl::new(Method::Review).id(require_id("review_id", review_id)?);
        self.get_resource(review, QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::MediaType;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_review() {
        // Arrange
        let body = r#"{"id":"5488c29bc3a3686f4a00004a","author":"Travis Bell","author_details":{"username":"travisbell","rating":7.0},"content":"Great movie.","iso_639_1":"en","media_id":603,"media_title":"The Matrix","media_type":"movie","url":"https://www.themoviedb.org/review/5488c29bc3a3686f4a00004a"}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let review = client.review("5488c29bc3a3686f4a00004a").await.unwrap();

        // Assert
        assert_eq!(review.author, "Travis Bell");
        assert_eq!(review.media_id, Some(603));
        assert_eq!(review.media_type, Some(MediaType::Movie));
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/review/5488c29bc3a3686f4a00004a"
        );
    }

    #[tokio::test]
    async fn test_review_without_id_is_not_found() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body(r#"{"author":""}"#)).unwrap();

        // Act
        let err = client.review("missing").await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_blank_review_id_sends_nothing() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::default()).unwrap();

        // Act
        let err = client.review(" ").await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(client.transport().requests().is_empty());
    }
}
