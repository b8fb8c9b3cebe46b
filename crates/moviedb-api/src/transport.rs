//! HTTP transport seam and the reqwest-backed implementation.
#![allow(clippy::future_not_send)]

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode as HttpStatus};
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use crate::error::{MovieDbError, Result};
use crate::model::StatusCode;
use crate::url::redact;

/// Default spacing between requests (~40 req/s, the documented TMDB ceiling).
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Raw HTTP transport used by the client.
///
/// Implementations return the response body as text. Any failure, including a
/// non-2xx status, must surface as an error; the client never retries.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    async fn get(&self, url: &Url) -> Result<String>;

    /// Performs a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    async fn post(&self, url: &Url, json_body: &str) -> Result<String>;

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    async fn delete(&self, url: &Url) -> Result<String>;
}

/// Transport backed by `reqwest` (rustls, gzip) with request pacing.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ReqwestTransport {
    /// HTTP client.
    http_client: Client,
    /// Minimum gap between requests; `Duration::ZERO` disables pacing.
    min_interval: Duration,
    /// When the previous request was released.
    last_sent: Mutex<Option<Instant>>,
}

impl ReqwestTransport {
    /// Creates a transport.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Transport`] if the `reqwest::Client` cannot be built.
    pub fn new(
        user_agent: &str,
        min_interval: Duration,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| MovieDbError::Transport {
            url: String::new(),
            status: None,
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http_client,
            min_interval,
            last_sent: Mutex::new(None),
        })
    }

    /// Holds the caller until `min_interval` has passed since the previous
    /// request. Each request passes here once; a failure is never re-sent.
    async fn pace(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last_sent = self.last_sent.lock().await;
        if let Some(last) = *last_sent {
            let remaining = self.min_interval.saturating_sub(last.elapsed());
            if !remaining.is_zero() {
                tokio::time::sleep(remaining).await;
            }
        }
        *last_sent = Some(Instant::now());
    }

    /// Sends `request` and returns the body of a 2xx response.
    async fn execute(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<String> {
        self.pace().await;

        let shown = redact(url);
        tracing::debug!(method, url = %shown, "TMDB API request");

        let response = request.send().await.map_err(|e| MovieDbError::Transport {
            url: shown.clone(),
            status: None,
            message: e.without_url().to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| MovieDbError::Transport {
            url: shown.clone(),
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {}", e.without_url()),
        })?;
        tracing::trace!(status = status.as_u16(), body_len = body.len(), "TMDB API response");

        if status.is_success() {
            return Ok(body);
        }
        Err(status_error(&shown, status, &body))
    }
}

/// Maps a non-2xx response to an error, using the vendor status body when present.
fn status_error(url: &str, status: HttpStatus, body: &str) -> MovieDbError {
    let message = serde_json::from_str::<StatusCode>(body).map_or_else(
        |_| String::from(body.trim()),
        |s| format!("code={}, message={}", s.status_code, s.status_message),
    );

    tracing::warn!(url, status = status.as_u16(), %message, "TMDB API error");

    match status {
        HttpStatus::UNAUTHORIZED => {
            MovieDbError::Authentication(format!("HTTP {status}: {message}"))
        }
        HttpStatus::NOT_FOUND => MovieDbError::NotFound {
            url: String::from(url),
        },
        _ => MovieDbError::Transport {
            url: String::from(url),
            status: Some(status.as_u16()),
            message: format!("HTTP {status}: {message}"),
        },
    }
}

impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all)]
    async fn get(&self, url: &Url) -> Result<String> {
        let request = self.http_client.get(url.clone());
        self.execute("GET", url, request).await
    }

    #[instrument(skip_all)]
    async fn post(&self, url: &Url, json_body: &str) -> Result<String> {
        let request = self
            .http_client
            .post(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(String::from(json_body));
        self.execute("POST", url, request).await
    }

    #[instrument(skip_all)]
    async fn delete(&self, url: &Url) -> Result<String> {
        let request = self.http_client.delete(url.clone());
        self.execute("DELETE", url, request).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::{Duration, Instant};

    use url::Url;

    use super::{HttpStatus, HttpTransport, MovieDbError, ReqwestTransport, status_error};
    use crate::error::ErrorKind;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new("test/0.0.0", Duration::ZERO, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_status_error_unauthorized_is_authentication() {
        // Arrange
        let body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let err = status_error("u", HttpStatus::UNAUTHORIZED, body);

        // Assert
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_status_error_not_found() {
        // Arrange
        let body = r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#;

        // Act
        let err = status_error("https://x/3/movie/0", HttpStatus::NOT_FOUND, body);

        // Assert
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.url(), Some("https://x/3/movie/0"));
    }

    #[test]
    fn test_status_error_plain_body() {
        // Arrange & Act
        let err = status_error("u", HttpStatus::BAD_GATEWAY, "upstream down\n");

        // Assert
        assert!(matches!(
            err,
            MovieDbError::Transport { status: Some(502), ref message, .. }
                if message.contains("upstream down")
        ));
    }

    #[tokio::test]
    async fn test_get_returns_body() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/603"))
            .and(wiremock::matchers::query_param("api_key", "KEY"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(r#"{"id":603}"#))
            .mount(&mock_server)
            .await;
        let url = Url::parse(&format!("{}/3/movie/603?api_key=KEY", mock_server.uri())).unwrap();

        // Act
        let body = transport().get(&url).await.unwrap();

        // Assert
        assert_eq!(body, r#"{"id":603}"#);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::header("content-type", "application/json"))
            .and(wiremock::matchers::body_json(serde_json::json!({"value": 8.5})))
            .respond_with(
                wiremock::ResponseTemplate::new(201)
                    .set_body_string(r#"{"status_code":1,"status_message":"Success."}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let url = Url::parse(&format!("{}/3/movie/603/rating", mock_server.uri())).unwrap();

        // Act
        let body = transport().post(&url, r#"{"value":8.5}"#).await.unwrap();

        // Assert
        assert!(body.contains("Success"));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .respond_with(wiremock::ResponseTemplate::new(429).set_body_string(
                r#"{"status_code":25,"status_message":"Your request count is over the allowed limit."}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;
        let url = Url::parse(&format!(
            "{}/3/movie/603/rating?api_key=SECRET",
            mock_server.uri()
        ))
        .unwrap();

        // Act
        let err = transport().delete(&url).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.to_string().contains("SECRET"));
        assert!(err.to_string().contains("allowed limit"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Arrange: nothing listens on port 9 of localhost
        let url = Url::parse("http://127.0.0.1:9/3/movie/1").unwrap();

        // Act
        let err = transport().get(&url).await.unwrap_err();

        // Assert
        assert!(matches!(err, MovieDbError::Transport { status: None, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_hides_api_key() {
        // Arrange
        let url = Url::parse("http://127.0.0.1:9/3/movie/1?api_key=SECRET").unwrap();

        // Act
        let err = transport().get(&url).await.unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.to_string().contains("SECRET"));
        assert!(!format!("{err:?}").contains("SECRET"));
    }

    #[tokio::test]
    async fn test_pacing_spaces_consecutive_requests() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("{}"))
            .expect(2)
            .mount(&mock_server)
            .await;
        let transport =
            ReqwestTransport::new("test/0.0.0", Duration::from_millis(80), None).unwrap();
        let url = Url::parse(&format!("{}/3/genre/movie/list", mock_server.uri())).unwrap();

        // Act
        let start = Instant::now();
        transport.get(&url).await.unwrap();
        transport.get(&url).await.unwrap();

        // Assert
        assert!(start.elapsed() >= Duration::from_millis(80));
    }

    #[tokio::test]
    async fn test_paced_failure_is_sent_once() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(503).set_body_string("busy"))
            .expect(1)
            .mount(&mock_server)
            .await;
        let transport =
            ReqwestTransport::new("test/0.0.0", Duration::from_millis(10), None).unwrap();
        let url = Url::parse(&format!("{}/3/movie/603", mock_server.uri())).unwrap();

        // Act
        let err = transport.get(&url).await.unwrap_err();

        // Assert
        assert!(matches!(err, MovieDbError::Transport { status: Some(503), .. }));
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_interval_never_records() {
        // Arrange
        let transport = transport();

        // Act
        transport.pace().await;
        transport.pace().await;

        // Assert
        assert!(transport.last_sent.lock().await.is_none());
    }
}
