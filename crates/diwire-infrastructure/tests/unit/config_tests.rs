//! Configuration Loader Tests

use diwire_infrastructure::config::loader::{ConfigLoader, validate_app_config};
use diwire_infrastructure::config::{AnnotationTags, AppConfig, OutputConfig, ResolverConfig};
use diwire_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::env;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: every test uses its own prefix, so no two tests touch the same variable
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: see `set_env`
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.resolver.token_suffix, "Token");
    assert_eq!(config.resolver.default_module, "default");
    assert!(config.output.pretty);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_config_file_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("diwire.toml");
    std::fs::write(
        &config_path,
        "[resolver]\ntoken_suffix = \"Key\"\ndefault_module = \"core\"\n\n\
         [output]\npretty = false\npath = \"out/plan.json\"\n",
    )
    .unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("DIWIRE_TEST_FILE_LOAD")
        .load()
        .unwrap();

    let expected = AppConfig {
        resolver: ResolverConfig {
            token_suffix: "Key".to_string(),
            default_module: "core".to_string(),
            ..ResolverConfig::default()
        },
        output: OutputConfig {
            pretty: false,
            path: Some("out/plan.json".into()),
        },
        ..AppConfig::default()
    };
    assert_eq!(loaded, expected);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("diwire.toml");
    std::fs::write(&config_path, "[resolver.annotations]\nservice = \"token\"\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("DIWIRE_TEST_PARTIAL")
        .load()
        .unwrap();

    assert_eq!(config.resolver.annotations.service, "token");
    assert_eq!(config.resolver.annotations.injectable, "injectable");
    assert_eq!(config.resolver.token_suffix, "Token");
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("diwire.toml");
    std::fs::write(&config_path, "[resolver]\ntoken_suffix = \"Key\"\n").unwrap();

    set_env("DIWIRE_TEST_ENV__RESOLVER__TOKEN_SUFFIX", "Id");
    set_env("DIWIRE_TEST_ENV__LOGGING__LEVEL", "debug");
    let result = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("DIWIRE_TEST_ENV")
        .load();
    remove_env("DIWIRE_TEST_ENV__RESOLVER__TOKEN_SUFFIX");
    remove_env("DIWIRE_TEST_ENV__LOGGING__LEVEL");

    let config = result.unwrap();
    assert_eq!(config.resolver.token_suffix, "Id");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load();

    assert!(result.is_err());
}

#[test]
fn test_source_path_of_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("diwire.toml");
    std::fs::write(&config_path, "").unwrap();

    let source = ConfigLoader::new()
        .with_config_path(&config_path)
        .source_path()
        .unwrap();
    assert_eq!(source.as_deref(), Some(config_path.as_path()));

    let missing = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .source_path();
    assert!(matches!(missing, Err(diwire_domain::Error::Configuration { .. })));
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut config = AppConfig::default();
    config.resolver.token_suffix = "  ".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());

    let config = AppConfig {
        resolver: ResolverConfig {
            annotations: AnnotationTags {
                module: "injectable".to_string(),
                ..AnnotationTags::default()
            },
            ..ResolverConfig::default()
        },
        ..AppConfig::default()
    };
    assert!(validate_app_config(&config).is_err());

    let config = AppConfig {
        resolver: ResolverConfig {
            annotations: AnnotationTags {
                service: "di service".to_string(),
                ..AnnotationTags::default()
            },
            ..ResolverConfig::default()
        },
        ..AppConfig::default()
    };
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("diwire.toml");
    std::fs::write(&config_path, "[resolver]\nannotations = \"oops\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("DIWIRE_TEST_MALFORMED")
        .load()
        .unwrap_err();

    assert!(matches!(err, diwire_domain::Error::Configuration { .. }));
}
