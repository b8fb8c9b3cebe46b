//! API configuration: image base URLs and sizes, jobs, timezones.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MovieDbError, Result};

/// Image settings from `configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Backdrop sizes.
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    pub still_sizes: Vec<String>,
}

impl ImageConfiguration {
    /// Every advertised size, across all image kinds.
    pub fn all_sizes(&self) -> impl Iterator<Item = &str> {
        self.backdrop_sizes
            .iter()
            .chain(&self.logo_sizes)
            .chain(&self.poster_sizes)
            .chain(&self.profile_sizes)
            .chain(&self.still_sizes)
            .map(String::as_str)
    }

    /// Returns `true` if `size` is advertised for any image kind.
    #[must_use]
    pub fn is_valid_size(&self, size: &str) -> bool {
        self.all_sizes().any(|s| s == size)
    }

    /// Builds the full URL of an image, e.g. `{secure_base_url}w500/abc.jpg`.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Validation`] if `size` is not advertised and
    /// [`MovieDbError::InvalidUrl`] if the base URL cannot be parsed.
    pub fn image_url(&self, image_path: &str, size: &str) -> Result<Url> {
        if !self.is_valid_size(size) {
            return Err(MovieDbError::validation(format!(
                "invalid image size '{size}'"
            )));
        }
        let base = if self.secure_base_url.is_empty() {
            &self.base_url
        } else {
            &self.secure_base_url
        };
        let raw = format!(
            "{}/{size}/{}",
            base.trim_end_matches('/'),
            image_path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| MovieDbError::InvalidUrl(format!("{raw}: {e}")))
    }
}

/// Response from `configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Image settings.
    pub images: ImageConfiguration,
    /// Keys reported by the change endpoints.
    pub change_keys: Vec<String>,
}

/// Department and its jobs (`configuration/jobs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDepartment {
    /// Department name.
    pub department: String,
    /// Jobs of the department.
    pub jobs: Vec<String>,
}

/// Timezones of a country (`configuration/timezones`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Zone names.
    pub zones: Vec<String>,
}
