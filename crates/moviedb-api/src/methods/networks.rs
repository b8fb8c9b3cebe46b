//! `network/{network_id}`.

use crate::client::TmdbClient;
use crate::error::Result;
use crate::model::Network;
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method};

impl<T: HttpTransport> TmdbClient<T> {
    /// Television network details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the network does not exist.
    pub async fn network_info(&self, network_id: u64) -> Result<Network> {
        self.get_resource(ApiUrl::new(Method::Network).id(network_id), QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_network_info() {
        // Arrange
        let body = r#"{"id":49,"name":"HBO","headquarters":"New York City, New York","homepage":"https://www.hbo.com","logo_path":"/tuomPhY2UtuPTqqFnKMVHvSb724.png","origin_country":"US"}"#;
        let client = TmdbClient::new("KEY", MockTransport::with_body(body)).unwrap();

        // Act
        let network = client.network_info(49).await.unwrap();

        // Assert
        assert_eq!(network.name, "HBO");
        assert_eq!(network.headquarters.as_deref(), Some("New York City, New York"));
        assert_eq!(
            client.transport().last_request().unwrap().url.as_str(),
            "https://api.themoviedb.org/3/network/49?api_key=KEY"
        );
    }
}
