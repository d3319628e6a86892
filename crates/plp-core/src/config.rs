use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// config pointed at the public catalog. The catalog URL is passed through
/// as-is; `CatalogClient::new` is where it gets validated.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("PLP_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PLP_BIND_ADDR", e.to_string()))?;

    let catalog_timeout_secs = or_default("PLP_CATALOG_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("PLP_CATALOG_TIMEOUT_SECS", e.to_string()))?;
    if catalog_timeout_secs == 0 {
        return Err(invalid(
            "PLP_CATALOG_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env: parse_environment(&or_default("PLP_ENV", "development")),
        bind_addr,
        log_level: or_default("PLP_LOG_LEVEL", "info"),
        catalog_url: or_default("PLP_CATALOG_URL", DEFAULT_CATALOG_URL),
        catalog_timeout_secs,
        user_agent: or_default("PLP_USER_AGENT", "plp/0.1 (product-listing)"),
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
#[path = "config_test.rs"]
mod tests;
