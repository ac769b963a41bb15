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
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.data_path.is_none());
    assert_eq!(cfg.default_page_size, 16);
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("CATALOG_ENV", "production");
    map.insert("CATALOG_BIND_ADDR", "127.0.0.1:8080");
    map.insert("CATALOG_LOG_LEVEL", "debug");
    map.insert("CATALOG_DATA_PATH", "./config/catalog.yaml");
    map.insert("CATALOG_DEFAULT_PAGE_SIZE", "4");
    map.insert("CATALOG_RATE_LIMIT_MAX_REQUESTS", "10");
    map.insert("CATALOG_RATE_LIMIT_WINDOW_SECS", "5");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.data_path.as_deref(),
        Some(std::path::Path::new("./config/catalog.yaml"))
    );
    assert_eq!(cfg.default_page_size, 4);
    assert_eq!(cfg.rate_limit_max_requests, 10);
    assert_eq!(cfg.rate_limit_window_secs, 5);
}

#[test]
fn build_app_config_blank_data_path_means_builtin() {
    let mut map = HashMap::new();
    map.insert("CATALOG_DATA_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.data_path.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("CATALOG_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATALOG_BIND_ADDR"),
        "expected InvalidEnvVar(CATALOG_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = HashMap::new();
    map.insert("CATALOG_DEFAULT_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATALOG_DEFAULT_PAGE_SIZE"),
        "expected InvalidEnvVar(CATALOG_DEFAULT_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_rate_limit() {
    let mut map = HashMap::new();
    map.insert("CATALOG_RATE_LIMIT_MAX_REQUESTS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATALOG_RATE_LIMIT_MAX_REQUESTS"),
        "expected InvalidEnvVar(CATALOG_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_window() {
    let mut map = HashMap::new();
    map.insert("CATALOG_RATE_LIMIT_WINDOW_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATALOG_RATE_LIMIT_WINDOW_SECS"),
        "expected InvalidEnvVar(CATALOG_RATE_LIMIT_WINDOW_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_marks_builtin_catalog() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(format!("{cfg:?}").contains("[built-in]"));
}
