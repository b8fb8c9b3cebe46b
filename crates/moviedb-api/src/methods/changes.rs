//! Global change lists (`movie/changes`, `tv/changes`, `person/changes`).

use chrono::NaiveDate;

use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::ChangeListItem;
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn change_params(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    page: Option<u32>,
) -> QueryParams {
    QueryParams::new()
        .with_opt(Param::StartDate, start_date)
        .with_opt(Param::EndDate, end_date)
        .with_opt(Param::Page, page)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// IDs of movies changed in the window (at most 14 days, default last day).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn movie_change_list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeListItem>> {
        self.get_list(
            ApiUrl::new(Method::Movie).sub(SubMethod::Changes),
            change_params(start_date, end_date, page),
        )
        .await
    }

    /// IDs of series changed in the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_change_list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeListItem>> {
        self.get_list(
            ApiUrl::new(Method::Tv).sub(SubMethod::Changes),
            change_params(start_date, end_date, page),
        )
        .await
    }

    /// IDs of people changed in the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn person_change_list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: Option<u32>,
    ) -> Result<ResultList<ChangeListItem>> {
        self.get_list(
            ApiUrl::new(Method::Person).sub(SubMethod::Changes),
            change_params(start_date, end_date, page),
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
    async fn test_movie_change_list_dates() {
        // Arrange
        let body = r#"{"results":[{"id":603,"adult":false},{"id":604}],"page":1,"total_pages":1,"total_results":2}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();

        // Act
        let changes = client
            .movie_change_list(Some(start), Some(end), None)
            .await
            .unwrap();

        // Assert
        assert_eq!(changes.results.len(), 2);
        assert_eq!(changes.results.first().unwrap().adult, Some(false));
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/movie/changes?api_key=KEY&start_date=2024-01-01&end_date=2024-01-14"
        );
    }

    #[tokio::test]
    async fn test_person_change_list_path() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"results":[],"page":2,"total_pages":2,"total_results":100}"#),
        )
        .unwrap();

        // Act
        let changes = client.person_change_list(None, None, Some(2)).await.unwrap();

        // Assert
        assert_eq!(changes.page, 2);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/person/changes?api_key=KEY&page=2"
        );
    }
}
