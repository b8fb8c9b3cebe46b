//! `TmdbClient` - request plumbing shared by every method group.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::cache::ConfigurationCache;
use crate::envelope::{self, ResultList};
use crate::error::{MovieDbError, Result};
use crate::model::Identified;
use crate::params::QueryParams;
use crate::transport::{DEFAULT_MIN_INTERVAL, HttpTransport, ReqwestTransport};
use crate::url::{ApiUrl, redact};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("moviedb-api/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Generic over the transport so tests can substitute a recording double;
/// production code uses the default [`ReqwestTransport`].
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient<T = ReqwestTransport> {
    /// HTTP transport.
    transport: T,
    /// Base URL for API requests.
    base_url: Url,
    /// API key sent as the `api_key` query parameter.
    api_key: String,
    /// Memoized configuration.
    pub(crate) configuration: ConfigurationCache,
}

impl<T: fmt::Debug> fmt::Debug for TmdbClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"REDACTED")
            .finish_non_exhaustive()
    }
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            min_interval: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (default: `moviedb-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms, zero disables pacing).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Sets the per-request timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds a client over [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or blank.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        let min_interval = self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL);
        let transport = ReqwestTransport::new(&user_agent, min_interval, self.timeout)?;
        self.build_with_transport(transport)
    }

    /// Builds a client over a caller-supplied transport.
    ///
    /// `user_agent`, `min_interval` and `timeout` are properties of the
    /// transport and are ignored here.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or blank.
    /// - the default base URL cannot be parsed.
    pub fn build_with_transport<T: HttpTransport>(self, transport: T) -> Result<TmdbClient<T>> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MovieDbError::validation("api_key is required"))?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| MovieDbError::InvalidUrl(format!("{DEFAULT_BASE_URL}: {e}")))?
        };
        if base_url.cannot_be_a_base() {
            return Err(MovieDbError::InvalidUrl(format!(
                "base URL cannot be a base: {base_url}"
            )));
        }

        Ok(TmdbClient {
            transport,
            base_url,
            api_key,
            configuration: ConfigurationCache::new(),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Creates a client over `transport` with the default base URL.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Validation`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>, transport: T) -> Result<Self> {
        TmdbClientBuilder::new()
            .api_key(api_key)
            .build_with_transport(transport)
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Assembles the request URL for `api` and `params`.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::InvalidUrl`] if the URL cannot be built.
    pub fn request_url(&self, api: &ApiUrl, params: &QueryParams) -> Result<Url> {
        api.build(&self.base_url, &self.api_key, params)
    }

    /// Sends a GET and returns the redacted URL and the body.
    async fn fetch(&self, api: &ApiUrl, params: &QueryParams) -> Result<(String, String)> {
        let url = self.request_url(api, params)?;
        let shown = redact(&url);
        tracing::debug!(url = %shown, "GET");
        let body = self.transport.get(&url).await?;
        tracing::trace!(body_len = body.len(), "response received");
        Ok((shown, body))
    }

    /// GET and decode the body directly into `R`.
    #[instrument(skip_all, fields(path = %api.path()))]
    pub(crate) async fn get_object<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
    ) -> Result<R> {
        let (shown, body) = self.fetch(&api, &params).await?;
        envelope::decode_object(&shown, &body)
    }

    /// GET a single resource; an empty body or a zero id is reported as not found.
    #[instrument(skip_all, fields(path = %api.path()))]
    pub(crate) async fn get_resource<R: DeserializeOwned + Identified>(
        &self,
        api: ApiUrl,
        params: QueryParams,
    ) -> Result<R> {
        let (shown, body) = self.fetch(&api, &params).await?;
        if body.trim().is_empty() {
            return Err(MovieDbError::NotFound { url: shown });
        }
        let resource: R = envelope::decode_object(&shown, &body)?;
        if !resource.has_id() {
            return Err(MovieDbError::NotFound { url: shown });
        }
        Ok(resource)
    }

    /// GET a paginated `results` envelope.
    #[instrument(skip_all, fields(path = %api.path()))]
    pub(crate) async fn get_list<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
    ) -> Result<ResultList<R>> {
        let (shown, body) = self.fetch(&api, &params).await?;
        envelope::decode_list(&shown, &body)
    }

    /// GET a collection stored under `root`.
    #[instrument(skip_all, fields(path = %api.path(), root = %root))]
    pub(crate) async fn get_named_list<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
        root: &str,
    ) -> Result<ResultList<R>> {
        let (shown, body) = self.fetch(&api, &params).await?;
        envelope::decode_named_list(&shown, &body, root)
    }

    /// GET an object-of-arrays stored under `root`.
    #[instrument(skip_all, fields(path = %api.path(), root = %root))]
    pub(crate) async fn get_map<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
        root: &str,
    ) -> Result<BTreeMap<String, Vec<R>>> {
        let (shown, body) = self.fetch(&api, &params).await?;
        envelope::decode_map(&shown, &body, root)
    }

    /// POST a JSON body and decode the response into `R`.
    #[instrument(skip_all, fields(path = %api.path()))]
    pub(crate) async fn post_object<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
        json_body: &serde_json::Value,
    ) -> Result<R> {
        let url = self.request_url(&api, &params)?;
        let shown = redact(&url);
        tracing::debug!(url = %shown, "POST");
        let body = self.transport.post(&url, &json_body.to_string()).await?;
        envelope::decode_object(&shown, &body)
    }

    /// DELETE and decode the response into `R`.
    #[instrument(skip_all, fields(path = %api.path()))]
    pub(crate) async fn delete_object<R: DeserializeOwned>(
        &self,
        api: ApiUrl,
        params: QueryParams,
    ) -> Result<R> {
        let url = self.request_url(&api, &params)?;
        let shown = redact(&url);
        tracing::debug!(url = %shown, "DELETE");
        let body = self.transport.delete(&url).await?;
        envelope::decode_object(&shown, &body)
    }
}
