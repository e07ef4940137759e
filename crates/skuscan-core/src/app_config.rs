use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Storefront domain the catalog queries are sent to.
    pub shop_domain: String,
    /// Admin API version path segment, e.g. `2025-01`.
    pub api_version: String,
    /// Admin access token. Absence is not validated here — upstream calls
    /// without a token fail as auth errors and fall into the tolerated
    /// page-failure path.
    pub admin_token: Option<String>,
    /// Products requested per catalog page.
    pub page_size: u32,
    /// Variants requested per product.
    pub variants_per_product: u32,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Renders the Admin GraphQL endpoint URL for the configured store.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "https://{}/admin/api/{}/graphql.json",
            self.shop_domain, self.api_version
        )
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("shop_domain", &self.shop_domain)
            .field("api_version", &self.api_version)
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[redacted]"),
            )
            .field("page_size", &self.page_size)
            .field("variants_per_product", &self.variants_per_product)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
