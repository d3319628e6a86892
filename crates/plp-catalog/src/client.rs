//! HTTP client for the product catalog endpoint.

use std::time::Duration;

use plp_core::Product;
use reqwest::{Client, Url};

use crate::error::CatalogError;

/// Loads the product catalog from a fixed JSON endpoint.
///
/// Each call to [`CatalogClient::fetch_products`] performs exactly one GET.
/// Nothing is cached and failures are not retried.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Creates a `CatalogClient` for `endpoint` with the given request
    /// timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidEndpoint`] if `endpoint` is not an absolute http(s) URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches the full catalog in upstream order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] — network, TLS, or timeout failure.
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Deserialize`] — body is not a JSON array of products.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint.as_str();
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let products = serde_json::from_str::<Vec<Product>>(&body).map_err(|e| {
            CatalogError::Deserialize {
                context: format!("product catalog from {url}"),
                source: e,
            }
        })?;

        tracing::debug!(
            endpoint = url,
            status = status.as_u16(),
            count = products.len(),
            "catalog fetched"
        );
        Ok(products)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: format!("unsupported scheme \"{}\"", url.scheme()),
        });
    }
    Ok(url)
}
