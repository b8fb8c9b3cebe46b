//! `person/*` endpoints.

use chrono::NaiveDate;

use super::language_page;
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{
    Artwork, ChangeKey, ExternalIds, PersonBasic, PersonCredits, PersonInfo, TaggedImage,
};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn person(person_id: u64) -> ApiUrl {
    ApiUrl::new(Method::Person).id(person_id)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches person details (`person/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the person does not exist.
    pub async fn person_info(
        &self,
        person_id: u64,
        language: Option<&str>,
        append: &[&str],
    ) -> Result<PersonInfo> {
        let params = QueryParams::new()
            .with_opt(Param::Language, language)
            .with(Param::AppendToResponse, append);
        self.get_resource(person(person_id), params).await
    }

    /// Movie credits of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_movie_credits(
        &self,
        person_id: u64,
        language: Option<&str>,
    ) -> Result<PersonCredits> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_object(person(person_id).sub(SubMethod::MovieCredits), params)
            .await
    }

    /// TV credits of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_tv_credits(
        &self,
        person_id: u64,
        language: Option<&str>,
    ) -> Result<PersonCredits> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_object(person(person_id).sub(SubMethod::TvCredits), params)
            .await
    }

    /// Movie and TV credits of a person, tagged by `media_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_combined_credits(
        &self,
        person_id: u64,
        language: Option<&str>,
    ) -> Result<PersonCredits> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_object(person(person_id).sub(SubMethod::CombinedCredits), params)
            .await
    }

    /// External ids of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_external_ids(&self, person_id: u64) -> Result<ExternalIds> {
        self.get_object(person(person_id).sub(SubMethod::ExternalIds), QueryParams::new())
            .await
    }

    /// Profile images (root `profiles`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_images(&self, person_id: u64) -> Result<ResultList<Artwork>> {
        self.get_named_list(
            person(person_id).sub(SubMethod::Images),
            QueryParams::new(),
            "profiles",
        )
        .await
    }

    /// Images the person is tagged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_tagged_images(
        &self,
        person_id: u64,
        page: Option<u32>,
    ) -> Result<ResultList<TaggedImage>> {
        let params = QueryParams::new().with_opt(Param::Page, page);
        self.get_list(person(person_id).sub(SubMethod::TaggedImages), params)
            .await
    }

    /// Change history of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_changes(
        &self,
        person_id: u64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeKey>> {
        let params = QueryParams::new()
            .with_opt(Param::StartDate, start_date)
            .with_opt(Param::EndDate, end_date)
            .with_opt(Param::Page, page);
        self.get_named_list(person(person_id).sub(SubMethod::Changes), params, "changes")
            .await
    }

    /// The most recently added person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn latest_person(&self) -> Result<PersonInfo> {
        self.get_resource(
            ApiUrl::new(Method::Person).sub(SubMethod::Latest),
            QueryParams::new(),
        )
        .await
    }

    /// Popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn popular_people(
        &self,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<PersonBasic>> {
        self.get_list(
            ApiUrl::new(Method::Person).sub(SubMethod::Popular),
            language_page(language, page),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::MockTransport;

    fn client(body: &str) -> TmdbClient<MockTransport> {
        TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap()
    }

    #[tokio::test]
    async fn test_person_info() {
        // Arrange
        let client = client(include_str!("../../../../fixtures/tmdb/person_6384.json"));

        // Act
        let person = client
            .person_info(6384, None, &["movie_credits"])
            .await
            .unwrap();

        // Assert
        assert_eq!(person.name, "Keanu Reeves");
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/person/6384?api_key=KEY&append_to_response=movie_credits"
        );
    }

    #[tokio::test]
    async fn test_person_images_profiles_root() {
        // Arrange
        let client = client(r#"{"id":6384,"profiles":[{"file_path":"/a.jpg","width":500},{"file_path":"/b.jpg","width":500}]}"#);

        // Act
        let images = client.person_images(6384).await.unwrap();

        // Assert
        assert_eq!(images.len(), 2);
        assert_eq!(images.total_results, 2);
        assert_eq!(images.page, 1);
    }

    #[tokio::test]
    async fn test_person_combined_credits_path() {
        // Arrange
        let client = client(r#"{"id":6384,"cast":[{"id":603,"media_type":"movie","title":"The Matrix"}],"crew":[]}"#);

        // Act
        let credits = client.person_combined_credits(6384, None).await.unwrap();

        // Assert
        assert_eq!(credits.cast.len(), 1);
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/person/6384/combined_credits"
        );
    }
}
