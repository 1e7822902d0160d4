use std::collections::HashMap;
use std::env::VarError;

use super::*;
use crate::types::DEFAULT_PAGE_SIZE;

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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "JOBBOARD_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(cfg.user_agent, "jobboard/0.1 (job-post-browser)");
}

#[test]
fn build_app_config_api_url_override() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_API_URL", "https://jobs.example.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://jobs.example.com/");
}

#[test]
fn build_app_config_rejects_unparseable_api_url() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_API_URL", "not a url");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBBOARD_API_URL"),
        "expected InvalidEnvVar(JOBBOARD_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_api_url() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_API_URL", "ftp://jobs.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBBOARD_API_URL"),
        "expected InvalidEnvVar(JOBBOARD_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBBOARD_BIND_ADDR"),
        "expected InvalidEnvVar(JOBBOARD_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_page_size_override() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_PAGE_SIZE", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_size, 50);
}

#[test]
fn build_app_config_page_size_out_of_range() {
    for raw in ["0", "101"] {
        let mut map = HashMap::new();
        map.insert("JOBBOARD_PAGE_SIZE", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBBOARD_PAGE_SIZE"),
            "expected InvalidEnvVar(JOBBOARD_PAGE_SIZE) for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn build_app_config_page_size_invalid() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_PAGE_SIZE", "twenty");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBBOARD_PAGE_SIZE"),
        "expected InvalidEnvVar(JOBBOARD_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_production_env() {
    let mut map = HashMap::new();
    map.insert("JOBBOARD_ENV", "production");
    map.insert("JOBBOARD_LOG_LEVEL", "warn");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "warn");
}
