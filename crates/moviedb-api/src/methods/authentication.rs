//! `authentication/*` token and session flow.

use super::session_params;
use crate::client::TmdbClient;
use crate::error::{MovieDbError, Result};
use crate::model::{TokenAuthorisation, TokenSession};
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn authentication(sub: SubMethod) -> ApiUrl {
    ApiUrl::new(Method::Authentication).sub(sub)
}

/// Fails when a request token was not issued successfully.
fn require_token(token: &TokenAuthorisation) -> Result<()> {
    if !token.success || token.request_token.trim().is_empty() {
        return Err(MovieDbError::Authentication(String::from(
            "request token was not authorised",
        )));
    }
    Ok(())
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Requests a new, not yet approved request token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn authorisation_token(&self) -> Result<TokenAuthorisation> {
        self.get_object(authentication(SubMethod::TokenNew), QueryParams::new())
            .await
    }

    /// Exchanges an approved request token for a user session.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Authentication`] without any request when
    /// `token` is unsuccessful, or when the vendor refuses the exchange.
    pub async fn session_token(&self, token: &TokenAuthorisation) -> Result<TokenSession> {
        require_token(token)?;
        let body = serde_json::json!({ "request_token": token.request_token });
        let session: TokenSession = self
            .post_object(authentication(SubMethod::SessionNew), QueryParams::new(), &body)
            .await?;
        if !session.success {
            return Err(MovieDbError::Authentication(String::from(
                "session could not be created",
            )));
        }
        tracing::debug!("TMDB user session created");
        Ok(session)
    }

    /// Approves a request token with user credentials.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Authentication`] when `token` is unsuccessful or
    /// the credentials are refused, [`MovieDbError::Validation`] for blank
    /// credentials.
    pub async fn session_token_login(
        &self,
        token: &TokenAuthorisation,
        username: &str,
        password: &str,
    ) -> Result<TokenAuthorisation> {
        require_token(token)?;
        if username.trim().is_empty() || password.is_empty() {
            return Err(MovieDbError::validation("username and password are required"));
        }
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "request_token": token.request_token,
        });
        let validated: TokenAuthorisation = self
            .post_object(
                authentication(SubMethod::TokenValidateWithLogin),
                QueryParams::new(),
                &body,
            )
            .await?;
        require_token(&validated)?;
        Ok(validated)
    }

    /// Creates a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn guest_session_token(&self) -> Result<TokenSession> {
        self.get_object(authentication(SubMethod::GuestSessionNew), QueryParams::new())
            .await
    }

    /// Invalidates a user session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn delete_session(&self, session_id: &str) -> Result<TokenSession> {
        self.delete_object(authentication(SubMethod::Session), session_params(session_id)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockTransport;

    const TOKEN_OK: &str = r#"{"success":true,"expires_at":"2016-08-26 17:04:39 UTC","request_token":"ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"}"#;

    #[tokio::test]
    async fn test_authorisation_token() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body(TOKEN_OK)).unwrap();

        // Act
        let token = client.authorisation_token().await.unwrap();

        // Assert
        assert!(token.success);
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/authentication/token/new?api_key=KEY"
        );
    }

    #[tokio::test]
    async fn test_session_token_rejects_failed_token_without_request() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::default()).unwrap();
        let token = TokenAuthorisation {
            success: false,
            request_token: String::from("abc"),
            ..TokenAuthorisation::default()
        };

        // Act
        let err = client.session_token(&token).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_full_login_flow() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_bodies(&[
                TOKEN_OK,
                TOKEN_OK,
                r#"{"success":true,"session_id":"79191836ddaa0da3df76a5ffef6f07ad6ab0c641"}"#,
            ]),
        )
        .unwrap();

        // Act
        let token = client.authorisation_token().await.unwrap();
        let approved = client
            .session_token_login(&token, "user", "pass")
            .await
            .unwrap();
        let session = client.session_token(&approved).await.unwrap();

        // Assert
        let requests = client.transport().requests();
        assert_eq!(
            session.session_id.as_deref(),
            Some("79191836ddaa0da3df76a5ffef6f07ad6ab0c641")
        );
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[1].url.path(),
            "/3/authentication/token/validate_with_login"
        );
        assert_eq!(
            requests[1].json_body().unwrap(),
            serde_json::json!({
                "username": "user",
                "password": "pass",
                "request_token": "ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"
            })
        );
        assert_eq!(requests[2].url.path(), "/3/authentication/session/new");
        assert_eq!(
            requests[2].json_body().unwrap(),
            serde_json::json!({"request_token": "ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"})
        );
    }

    #[tokio::test]
    async fn test_session_refused_by_vendor() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body(r#"{"success":false}"#)).unwrap();
        let token: TokenAuthorisation = serde_json::from_str(TOKEN_OK).unwrap();

        // Act
        let err = client.session_token(&token).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_guest_session_token() {
        // Arrange
        let client = TmdbClient::new(
            "KEY",
            MockTransport::with_body(r#"{"success":true,"guest_session_id":"1ce82ec1223641636ad4a60b07de3581","expires_at":"2016-08-27 16:26:40 UTC"}"#),
        )
        .unwrap();

        // Act
        let session = client.guest_session_token().await.unwrap();

        // Assert
        assert!(session.guest_session_id.is_some());
        assert_eq!(
            client.transport().last_request().unwrap().url.path(),
            "/3/authentication/guest_session/new"
        );
    }

    #[tokio::test]
    async fn test_delete_session() {
        // Arrange
        let client = TmdbClient::new("KEY", MockTransport::with_body(r#"{"success":true}"#)).unwrap();

        // Act
        let result = client.delete_session("S1").await.unwrap();

        // Assert
        let request = client.transport().last_request().unwrap();
        assert!(result.success);
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.url.path(), "/3/authentication/session");
    }
}
