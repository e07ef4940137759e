use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SKUSCAN_ENV", "development"));

    let bind_addr = parse_addr("SKUSCAN_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SKUSCAN_LOG_LEVEL", "info");

    let shop_domain = or_default("SHOPIFY_SHOP_DOMAIN", "anatta-test-store.myshopify.com");
    let api_version = or_default("SHOPIFY_API_VERSION", "2025-01");
    let admin_token = lookup("ADMIN_TOKEN").ok();

    let page_size = parse_u32("SKUSCAN_PAGE_SIZE", "1")?;
    let variants_per_product = parse_u32("SKUSCAN_VARIANTS_PER_PRODUCT", "100")?;
    let request_timeout_secs = parse_u64("SKUSCAN_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        shop_domain,
        api_version,
        admin_token,
        page_size,
        variants_per_product,
        request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should be valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.shop_domain, "anatta-test-store.myshopify.com");
        assert_eq!(cfg.api_version, "2025-01");
        assert!(cfg.admin_token.is_none());
        assert_eq!(cfg.page_size, 1);
        assert_eq!(cfg.variants_per_product, 100);
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SKUSCAN_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKUSCAN_BIND_ADDR"),
            "expected InvalidEnvVar(SKUSCAN_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_admin_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("ADMIN_TOKEN", "shpat_test");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.admin_token.as_deref(), Some("shpat_test"));
    }

    #[test]
    fn build_app_config_page_size_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SKUSCAN_PAGE_SIZE", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.page_size, 25);
    }

    #[test]
    fn build_app_config_page_size_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SKUSCAN_PAGE_SIZE", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKUSCAN_PAGE_SIZE"),
            "expected InvalidEnvVar(SKUSCAN_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_request_timeout_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SKUSCAN_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn graphql_endpoint_renders_domain_and_version() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPIFY_SHOP_DOMAIN", "example.myshopify.com");
        map.insert("SHOPIFY_API_VERSION", "2024-10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.graphql_endpoint(),
            "https://example.myshopify.com/admin/api/2024-10/graphql.json"
        );
    }

    #[test]
    fn app_config_debug_redacts_admin_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("ADMIN_TOKEN", "shpat_secret_value");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("shpat_secret_value"));
        assert!(rendered.contains("[redacted]"));
    }
}
