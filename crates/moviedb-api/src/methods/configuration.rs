//! `configuration/*` endpoints and image URL assembly.

use std::sync::Arc;

use url::Url;

use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::{Configuration, Country, JobDepartment, Language, Timezone};
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn configuration(sub: SubMethod) -> ApiUrl {
    ApiUrl::new(Method::Configuration).sub(sub)
}

impl<T: HttpTransport> TmdbClient<T> {
    /// API configuration, fetched once per client and reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the first fetch fails; a later call retries the fetch.
    pub async fn configuration(&self) -> Result<Arc<Configuration>> {
        self.configuration
            .get_or_fetch(|| {
                self.get_object(ApiUrl::new(Method::Configuration), QueryParams::new())
            })
            .await
    }

    /// Full URL of an image at one of the advertised sizes.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown size, or an error if the
    /// configuration cannot be fetched.
    pub async fn create_image_url(&self, image_path: &str, size: &str) -> Result<Url> {
        self.configuration().await?.images.image_url(image_path, size)
    }

    /// Departments and their jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn jobs(&self) -> Result<Vec<JobDepartment>> {
        self.get_object(configuration(SubMethod::Jobs), QueryParams::new())
            .await
    }

    /// Timezones per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn timezones(&self) -> Result<Vec<Timezone>> {
        self.get_object(configuration(SubMethod::Timezones), QueryParams::new())
            .await
    }

    /// Countries known to TMDB.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn countries(&self) -> Result<Vec<Country>> {
        self.get_object(configuration(SubMethod::Countries), QueryParams::new())
            .await
    }

    /// Languages known to TMDB.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn languages(&self) -> Result<Vec<Language>> {
        self.get_object(configuration(SubMethod::Languages), QueryParams::new())
            .await
    }
}
