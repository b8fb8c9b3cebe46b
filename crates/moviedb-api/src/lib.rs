//! Client library for TheMovieDB (TMDB) REST API v3.
//!
//! [`TmdbClient`] assembles request URLs, sends them through an
//! [`HttpTransport`] and decodes the JSON into the typed records of
//! [`model`]. Every endpoint group (movies, series, people, search,
//! account, lists, discover, ...) is an `impl` block on the client.
//!
//! ```no_run
//! # async fn run() -> moviedb_api::Result<()> {
//! use moviedb_api::TmdbClient;
//!
//! let client = TmdbClient::builder().api_key("your-api-key").build()?;
//! let matrix = client.movie_info(603, Some("en-US"), &["credits"]).await?;
//! let poster = client
//!     .create_image_url(matrix.poster_path.as_deref().unwrap_or_default(), "w500")
//!     .await?;
//! # let _ = poster;
//! # Ok(())
//! # }
//! ```

mod cache;
mod client;
pub mod envelope;
mod error;
mod methods;
pub mod model;
mod params;
mod transport;
pub mod url;

#[cfg(test)]
mod testing;

pub use cache::ConfigurationCache;
pub use client::{DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
pub use envelope::ResultList;
pub use error::{ErrorKind, MovieDbError, Result};
pub use methods::{
    Discover, ExternalSource, RATING_MAX, RATING_MIN, SearchMovieParams, SearchParams,
    SearchTvParams, Session, SortBy,
};
pub use params::{Param, ParamValue, QueryParams};
pub use transport::{HttpTransport, LocalHttpTransport, ReqwestTransport};
pub use self::url::{ApiUrl, Method, SubMethod};
