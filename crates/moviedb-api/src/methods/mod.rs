//! Per-resource method groups, each an `impl` block on [`TmdbClient`].
//!
//! [`TmdbClient`]: crate::TmdbClient

mod account;
mod authentication;
mod certifications;
mod changes;
mod collections;
mod companies;
mod configuration;
mod credits;
mod discover;
mod episodes;
mod find;
mod genres;
mod keywords;
mod lists;
mod movies;
mod networks;
mod people;
mod reviews;
mod search;
mod seasons;
mod tv;

pub use discover::{Discover, SortBy};
pub use find::ExternalSource;
pub use search::{SearchMovieParams, SearchParams, SearchTvParams};

use crate::error::{MovieDbError, Result};
use crate::params::{Param, QueryParams};

/// Lowest accepted rating.
pub const RATING_MIN: f64 = 0.0;

/// Highest accepted rating.
pub const RATING_MAX: f64 = 10.0;

/// Session a rating or account-state call is made under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Full user session (`session_id`).
    User(String),
    /// Guest session (`guest_session_id`).
    Guest(String),
}

impl Session {
    /// User session.
    pub fn user(session_id: impl Into<String>) -> Self {
        Self::User(session_id.into())
    }

    /// Guest session.
    pub fn guest(guest_session_id: impl Into<String>) -> Self {
        Self::Guest(guest_session_id.into())
    }

    /// Query parameters identifying the session.
    pub(crate) fn params(&self) -> Result<QueryParams> {
        let (param, id) = match self {
            Self::User(id) => (Param::SessionId, id),
            Self::Guest(id) => (Param::GuestSessionId, id),
        };
        if id.trim().is_empty() {
            return Err(MovieDbError::validation(format!("{param} must not be blank")));
        }
        Ok(QueryParams::new().with(param, id.as_str()))
    }
}

/// Query parameters for a user session id.
pub(crate) fn session_params(session_id: &str) -> Result<QueryParams> {
    Session::user(session_id).params()
}

/// Rejects a blank string id, which would otherwise render as an empty path segment.
pub(crate) fn require_id<'a>(name: &str, id: &'a str) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(MovieDbError::validation(format!("{name} must not be blank")));
    }
    Ok(id)
}

/// Rejects a rating outside `[RATING_MIN, RATING_MAX]` (NaN included).
pub(crate) fn validate_rating(value: f64) -> Result<()> {
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(())
    } else {
        Err(MovieDbError::validation(format!(
            "rating {value} is outside {RATING_MIN}..={RATING_MAX}"
        )))
    }
}

/// Body of a rating POST.
pub(crate) fn rating_body(value: f64) -> serde_json::Value {
    serde_json::json!({ "value": value })
}

/// `language` and `page`, the most common optional pair.
pub(crate) fn language_page(language: Option<&str>, page: Option<u32>) -> QueryParams {
    QueryParams::new()
        .with_opt(Param::Language, language)
        .with_opt(Param::Page, page)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_rating_bounds() {
        // Arrange & Act & Assert
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(10.0).is_ok());
        assert!(validate_rating(5.5).is_ok());
        assert_eq!(validate_rating(-1.0).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(validate_rating(11.0).unwrap_err().kind(), ErrorKind::Validation);
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_session_params() {
        // Arrange & Act
        let user = Session::user("S1").params().unwrap();
        let guest = Session::guest("G1").params().unwrap();

        // Assert
        assert_eq!(user.get(Param::SessionId), Some("S1"));
        assert!(!user.has(Param::GuestSessionId));
        assert_eq!(guest.get(Param::GuestSessionId), Some("G1"));
    }

    #[test]
    fn test_blank_session_is_rejected() {
        // Arrange & Act
        let err = Session::user(" ").params().unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("session_id"));
    }

    #[test]
    fn test_require_id() {
        // Arrange & Act
        let ok = require_id("list_id", "5861");
        let err = require_id("list_id", "  ").unwrap_err();

        // Assert
        assert_eq!(ok.unwrap(), "5861");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("list_id"));
    }

    #[test]
    fn test_rating_body_has_only_value() {
        // Arrange & Act
        let body = rating_body(8.5);

        // Assert
        assert_eq!(body, serde_json::json!({"value": 8.5}));
    }
}
