//! `company/*` endpoints.

use super::language_page;
use crate::client::TmdbClient;
use crate::envelope::ResultList;
use crate::error::Result;
use crate::model::{CompanyInfo, MovieBasic};
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

impl<T: HttpTransport> TmdbClient<T> {
    /// Company details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the company does not exist.
    pub async fn company_info(&self, company_id: u64) -> Result<CompanyInfo> {
        self.get_resource(ApiUrl::new(Method::Company).id(company_id), QueryParams::new())
            .await
    }

    /// Movies produced by a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn company_movies(
        &self,
        company_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<ResultList<MovieBasic>> {
        self.get_list(
            ApiUrl::new(Method::Company)
                .id(company_id)
                .sub(SubMethod::Movies),
            language_page(language, page),
        )
        .await
    }
}
