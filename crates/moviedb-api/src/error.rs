//! Error type shared by every request path.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MovieDbError>;

/// Coarse classification of a [`MovieDbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Response body did not match the expected JSON shape.
    Mapping,
    /// The HTTP exchange itself failed.
    Transport,
    /// Credentials were rejected or a token flow step failed.
    Authentication,
    /// A parameter was rejected before any request was sent.
    Validation,
    /// The vendor reported no such resource.
    NotFound,
    /// The request URL could not be assembled.
    InvalidUrl,
}

/// Errors returned by the TMDB client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum MovieDbError {
    /// JSON decoding failed.
    #[error("failed to map response from {url}: {source}")]
    Mapping {
        /// Request URL (API key redacted).
        url: String,
        /// Raw response body.
        body: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP request could not be completed or returned a non-success status.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Request URL (API key redacted).
        url: String,
        /// HTTP status, if a response was received.
        status: Option<u16>,
        /// Cause description.
        message: String,
    },

    /// Authentication failure.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Client-side validation failure.
    #[error("invalid parameter: {0}")]
    Validation(String),

    /// Resource does not exist.
    #[error("resource not found: {url}")]
    NotFound {
        /// Request URL (API key redacted).
        url: String,
    },

    /// Malformed request URL (misconfigured base URL or path).
    #[error("malformed request URL: {0}")]
    InvalidUrl(String),
}

impl MovieDbError {
    /// Returns the kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Mapping { .. } => ErrorKind::Mapping,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
        }
    }

    /// Returns the request URL the error refers to, when known.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Mapping { url, .. } | Self::Transport { url, .. } | Self::NotFound { url } => {
                Some(url)
            }
            Self::Authentication(_) | Self::Validation(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Shorthand for a validation error.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapping = MovieDbError::Mapping {
            url: String::from("https://example.org/3/movie/603"),
            body: String::from("{"),
            source,
        };

        // Act & Assert
        assert_eq!(mapping.kind(), ErrorKind::Mapping);
        assert_eq!(
            MovieDbError::validation("rating").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            MovieDbError::Authentication(String::from("denied")).kind(),
            ErrorKind::Authentication
        );
    }

    #[test]
    fn test_url_is_exposed_for_request_errors() {
        // Arrange
        let err = MovieDbError::NotFound {
            url: String::from("https://example.org/3/movie/1"),
        };

        // Act & Assert
        assert_eq!(err.url(), Some("https://example.org/3/movie/1"));
        assert!(MovieDbError::InvalidUrl(String::from("x")).url().is_none());
    }

    #[test]
    fn test_display_includes_url() {
        // Arrange
        let err = MovieDbError::Transport {
            url: String::from("https://example.org/3/tv/1"),
            status: Some(500),
            message: String::from("HTTP 500"),
        };

        // Act
        let text = err.to_string();

        // Assert
        assert!(text.contains("https://example.org/3/tv/1"));
        assert!(text.contains("HTTP 500"));
    }
}
