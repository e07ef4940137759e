//! HTTP client for the Shopify Admin GraphQL endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;
use crate::query::products_query;
use crate::types::{GraphQlResponse, ProductConnection};

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for one store's Admin GraphQL endpoint.
///
/// Holds the page size and per-product variant limit so every page request
/// is shaped identically; the pagination loop lives in [`crate::search`].
pub struct CatalogClient {
    http: Client,
    endpoint: String,
    access_token: Option<String>,
    page_size: u32,
    variants_per_product: u32,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with a configured request timeout.
    ///
    /// `access_token` is optional: a missing token is not an error here —
    /// the upstream rejects unauthenticated calls and that rejection flows
    /// through the tolerated page-failure path.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        endpoint: impl Into<String>,
        access_token: Option<String>,
        timeout_secs: u64,
        page_size: u32,
        variants_per_product: u32,
    ) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            access_token,
            page_size,
            variants_per_product,
        })
    }

    /// Fetches one page of the products connection.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] — network or TLS failure, or timeout.
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Deserialize`] — body is not a valid envelope.
    /// - [`CatalogError::GraphQl`] — `data` is null and `errors` explains why.
    /// - [`CatalogError::MissingData`] — `data` is null with no diagnostics.
    pub async fn fetch_page(
        &self,
        title: &str,
        cursor: Option<&str>,
    ) -> Result<ProductConnection, CatalogError> {
        let query = products_query(title, self.page_size, cursor, self.variants_per_product);

        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query }));
        if let Some(token) = &self.access_token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let envelope =
            serde_json::from_str::<GraphQlResponse>(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("products page for title \"{title}\""),
                source: e,
            })?;

        // A partial (throttled) response can carry both data and errors;
        // the page is still usable, so data wins when present.
        match envelope.data {
            Some(data) => Ok(data.products),
            None if envelope.errors.is_empty() => Err(CatalogError::MissingData),
            None => {
                let messages = envelope
                    .errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(CatalogError::GraphQl { messages })
            }
        }
    }
}
