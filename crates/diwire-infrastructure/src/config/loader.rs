//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values through figment.

use crate::config::{AppConfig, LoggingConfig, ResolverConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use diwire_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `DIWIRE__RESOLVER__TOKEN_SUFFIX`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(source) = self.source_path()? {
            figment = figment.merge(Toml::file(source));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Configuration file `load` reads, if any
    ///
    /// An explicit path must exist; without one the default locations are
    /// searched and `None` means defaults and environment only.
    pub fn source_path(&self) -> Result<Option<PathBuf>> {
        match &self.config_path {
            Some(config_path) if config_path.exists() => Ok(Some(config_path.clone())),
            Some(config_path) => Err(Error::config(format!(
                "Configuration file not found: {}",
                config_path.display()
            ))),
            None => Ok(Self::find_default_config_path()),
        }
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_resolver_config(&config.resolver)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_resolver_config(config: &ResolverConfig) -> Result<()> {
    if config.default_module.trim().is_empty() {
        return Err(Error::config("Default module cannot be empty"));
    }
    if config.token_suffix.trim().is_empty() {
        return Err(Error::config("Token suffix cannot be empty"));
    }

    let tags = &config.annotations;
    let named = [
        ("service", &tags.service),
        ("multi keyword", &tags.multi_keyword),
        ("injectable", &tags.injectable),
        ("lifecycle", &tags.lifecycle),
        ("module", &tags.module),
    ];
    for (role, tag) in named {
        if tag.trim().is_empty() || tag.contains(char::is_whitespace) {
            return Err(Error::config(format!(
                "Annotation tag for {role} must be a single word, got `{tag}`"
            )));
        }
    }

    let mut seen: Vec<&str> = Vec::new();
    for tag in [&tags.service, &tags.injectable, &tags.lifecycle, &tags.module] {
        if seen.contains(&tag.as_str()) {
            return Err(Error::config(format!("Annotation tag `{tag}` is used twice")));
        }
        seen.push(tag);
    }
    Ok(())
}
