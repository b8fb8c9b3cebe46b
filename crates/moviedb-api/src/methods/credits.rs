//! `credit/{credit_id}`.

use super::require_id;
use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::CreditInfo;
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method};

impl<T: HttpTransport> TmdbClient<T> {
    /// A single cast or crew credit with its person and media.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank `credit_id`, or an error if the
    /// request fails or the credit does not exist.
    pub async fn credit_info(
        &self,
        credit_id: &str,
        language: Option<&str>,
    ) -> Result<CreditInfo> {
        let credit = ApiUrl::new(Method::Credit).id(require_id("credit_id", credit_id)?);
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_resource(credit, params).await
    }
}
