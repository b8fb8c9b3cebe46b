//! Reviews.

use serde::{Deserialize, Serialize};

use super::common::MediaType;

/// Author of a review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorDetails {
    /// Display name.
    pub name: String,
    /// User name.
    pub username: String,
    /// Avatar path.
    pub avatar_path: Option<String>,
    /// Rating given by the author.
    pub rating: Option<f64>,
}

/// A review, as listed under a movie or series or fetched from `review/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review ID.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Author details.
    pub author_details: AuthorDetails,
    /// Review text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Update timestamp.
    pub updated_at: String,
    /// Review URL.
    pub url: String,
    /// Language (`review/{id}` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_639_1: Option<String>,
    /// Reviewed media ID (`review/{id}` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<u64>,
    /// Reviewed media title (`review/{id}` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_title: Option<String>,
    /// Reviewed media kind (`review/{id}` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}
