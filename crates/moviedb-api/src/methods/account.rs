//! `account/*` and `guest_session/*` endpoints.

use super::{language_page, require_id, session_params};
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{Account, Episode, MediaType, MovieBasic, StatusCode, TvBasic, UserList};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn account(account_id: u64, sub: SubMethod) -> ApiUrl {
    ApiUrl::new(Method::Account).id(account_id).sub(sub)
}

/// Body of the favorite / watchlist mutations: exactly three members.
fn mark_body(
    media_type: MediaType,
    media_id: u64,
    flag_name: &str,
    flag: bool,
) -> serde_json::Value {
    let mut body = serde_json::Map::with_capacity(3);
    body.insert(String::from("media_type"), serde_json::Value::from(media_type.as_str()));
    body.insert(String::from("media_id"), serde_json::Value::from(media_id));
    body.insert(String::from(flag_name), serde_json::Value::from(flag));
    serde_json::Value::Object(body)
}

/// Session id plus the optional `language` and `page`.
fn session_page(
    session_id: &str,
    language: Option<&str>,
    page: Option<u32>,
) -> Result<QueryParams> {
    Ok(session_params(session_id)?
        .with_opt(Param::Language, language)
        .with_opt(Param::Page, page))
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Account details for a user session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn account(&self, session_id: &str) -> Result<Account> {
        self.get_resource(ApiUrl::new(Method::Account), session_params(session_id)?)
            .await
    }

    /// Lists created by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn user_lists(
        &self,
        session_id: &str,
        account_id: u64,
        page: Option<u32>,
    ) -> Result<ResultList<UserList>> {
        let params = session_params(session_id)?.with_opt(Param::Page, page);
        self.get_list(account(account_id, SubMethod::Lists), params)
            .await
    }

    /// Favorite movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn favorite_movies(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::FavoriteMovies), params)
            .await
    }

    /// Favorite series.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn favorite_tv(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::FavoriteTv), params)
            .await
    }

    /// Marks or unmarks a movie or series as favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn modify_favorite_status(
        &self,
        session_id: &str,
        account_id: u64,
        media_type: MediaType,
        media_id: u64,
        favorite: bool,
    ) -> Result<StatusCode> {
        self.post_object(
            account(account_id, SubMethod::Favorite),
            session_params(session_id)?,
            &mark_body(media_type, media_id, "favorite", favorite),
        )
        .await
    }

    /// Movies rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn rated_movies(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::RatedMovies), params)
            .await
    }

    /// Series rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn rated_tv(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::RatedTv), params)
            .await
    }

    /// Episodes rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn rated_episodes(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<Episode>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::RatedEpisodes), params)
            .await
    }

    /// Movies on the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn watchlist_movies(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::WatchlistMovies), params)
            .await
    }

    /// Series on the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn watchlist_tv(
        &self,
        session_id: &str,
        account_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<TvBasic>> {
        let params = session_page(session_id, language, page)?;
        self.get_list(account(account_id, SubMethod::WatchlistTv), params)
            .await
    }

    /// Adds or removes a movie or series from the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn modify_watchlist(
        &self,
        session_id: &str,
        account_id: u64,
        media_type: MediaType,
        media_id: u64,
        watchlist: bool,
    ) -> Result<StatusCode> {
        self.post_object(
            account(account_id, SubMethod::Watchlist),
            session_params(session_id)?,
            &mark_body(media_type, media_id, "watchlist", watchlist),
        )
        .await
    }

    /// Movies rated under a guest session.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank `guest_session_id`, or an error
    /// if the request fails.
    pub async fn guest_rated_movies(
        &self,
        guest_session_id: &str,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        let rated = ApiUrl::new(Method::GuestSession)
            .id(require_id("guest_session_id", guest_session_id)?)
            .sub(SubMethod::RatedMovies);
        self.get_list(rated, language_page(language, page)).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockTransport;

    fn client() -> TmdbClient<MockTransport> {
        TmdbClient::new("KEY", MockTransport::default()).unwrap()
    }

    #[tokio::test]
    async fn test_modify_favorite_body() {
        // Arrange
        let client = client();

        // Act
        client
            .modify_favorite_status("S1", 42, MediaType::Movie, 603, true)
            .await
            .unwrap();

        // Assert
        let request = client.transport().last_request().unwrap();
        let body = request.json_body().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(
            request.url.as_str(),
            "https://api.themoviedb.org/3/account/42/favorite?api_key=KEY&session_id=S1"
        );
        assert_eq!(
            body,
            serde_json::json!({"media_type": "movie", "media_id": 603, "favorite": true})
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_modify_watchlist_body() {
        // Arrange
        let client = client();

        // Act
        client
            .modify_watchlist("S1", 42, MediaType::Tv, 1399, false)
            .await
            .unwrap();

        // Assert
        let body = client.transport().last_request().unwrap().json_body().unwrap();
        assert_eq!(
            body,
            serde_json::json!({"media_type": "tv", "media_id": 1399, "watchlist": false})
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_blank_session_sends_nothing() {
        // Arrange
        let client = client();

        // Act
        let err = client
            .favorite_movies("", 42, None, None)
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_rated_episodes_path() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"page":1,"results":[{"id":63056,"rating":8.0}],"total_pages":1,"total_results":1}"#),
        )
        .unwrap();

        // Act
        let episodes = client
            .rated_episodes("S1", 42, None, Some(1))
            .await
            .unwrap();

        // Assert
        assert_eq!(episodes.results.first().unwrap().rating, Some(8.0));
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/account/42/rated/tv/episodes?api_key=KEY&session_id=S1&page=1"
        );
    }

    #[tokio::test]
    async fn test_guest_rated_movies_path() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"page":1,"results":[],"total_pages":1,"total_results":0}"#),
        )
        .unwrap();

        // Act
        client.guest_rated_movies("G1", None, None).await.unwrap();

        // Assert
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/guest_session/G1/rated/movies"
        );
    }

    #[tokio::test]
    async fn test_blank_guest_session_sends_nothing() {
        // Arrange
        let client = client();

        // Act
        let err = client.guest_rated_movies("", None, None).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_account() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"id":42,"name":"","username":"travisbell","include_adult":false,"iso_639_1":"en","iso_3166_1":"CA"}"#),
        )
        .unwrap();

        // Act
        let account = client.account("S1").await.unwrap();

        // Assert
        assert_eq!(account.username, "travisbell");
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/account?api_key=KEY&session_id=S1"
        );
    }
}
