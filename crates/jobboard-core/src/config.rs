use crate::app_config::{AppConfig, Environment};
use crate::types::DEFAULT_PAGE_SIZE;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Largest `page_size` the upstream accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

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
/// local-development configuration.
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

    let api_base_url = or_default("JOBBOARD_API_URL", DEFAULT_API_BASE_URL);
    let parsed = url::Url::parse(&api_base_url)
        .map_err(|e| invalid("JOBBOARD_API_URL", e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(
            "JOBBOARD_API_URL",
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }

    let env = parse_environment(&or_default("JOBBOARD_ENV", "development"))?;

    let bind_addr = or_default("JOBBOARD_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("JOBBOARD_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("JOBBOARD_LOG_LEVEL", "info");

    let page_size = or_default("JOBBOARD_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
        .parse::<u32>()
        .map_err(|e| invalid("JOBBOARD_PAGE_SIZE", e.to_string()))?;
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(invalid(
            "JOBBOARD_PAGE_SIZE",
            format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
        ));
    }

    let user_agent = or_default("JOBBOARD_USER_AGENT", "jobboard/0.1 (job-post-browser)");

    Ok(AppConfig {
        api_base_url,
        env,
        bind_addr,
        log_level,
        page_size,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "JOBBOARD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
