//! `collection/*` endpoints.

use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::{CollectionInfo, Images};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

impl<T: HttpTransport> TmdbClient<T> {
    /// Collection details with its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the collection does not exist.
    pub async fn collection_info(
        &self,
        collection_id: u64,
        language: Option<&str>,
    ) -> Result<CollectionInfo> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_resource(ApiUrl::new(Method::Collection).id(collection_id), params)
            .await
    }

    /// Backdrops and posters of a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn collection_images(
        &self,
        collection_id: u64,
        language: Option<&str>,
        include_image_language: &[&str],
    ) -> Result<Images> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::IncludeImageLanguage, include_image_language);
        self.get_object(
            ApiUrl::new(Method::Collection)
                .id(collection_id)
                .sub(SubMethod::Images),
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
    async fn test_collection_info() {
        // Arrange
        let body = r#"{"id":2344,"name":"The Matrix Collection","parts":[{"id":603,"title":"The Matrix"},{"id":604,"title":"The Matrix Reloaded"}]}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let collection = client.collection_info(2344, Some("en-US")).await.unwrap();

        // Assert
        assert_eq!(collection.parts.len(), 2);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/collection/2344?api_key=KEY&language=en-US"
        );
    }

    #[tokio::test]
    async fn test_collection_without_id_is_not_found() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body("{}")).unwrap();

        // Act
        let err = client.collection_info(1, None).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_collection_images_languages() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":2344,"posters":[{"file_path":"/p.jpg"}]}"#),
        )
        .unwrap();

        // Act
        let images = client
            .collection_images(2344, None, &["en", "null"])
            .await
            .unwrap();

        // Assert
        assert_eq!(images.len(), 1);
        assert_eq!(
            client
                .transport()
                .last_request()
                .unwrap()
                .query("include_image_language")
                .as_deref(),
            Some("en,null")
        );
    }
}
