//! Site configuration loader
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./nexa.json or ./.nexa/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/nexa/config.json or ~/.config/nexa/config.json
//! 4. Built-in defaults
//!
//! Environment variables are applied on top of whichever source won, and
//! flags on top of those.

use anyhow::{anyhow, Context, Result};
use nexa_site_core::animation::Easing;
use nexa_site_core::SiteConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

const FILE_NAME: &str = "nexa.json";

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct SiteConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    instant_override: bool,
    notification_ms_override: Option<u64>,
}

impl SiteConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Collapse every demo delay to zero
    pub fn with_instant_override(mut self, instant: bool) -> Self {
        self.instant_override = instant;
        self
    }

    /// Set notification duration override
    pub fn with_notification_ms_override(mut self, ms: u64) -> Self {
        self.notification_ms_override = Some(ms);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Environment, then flags
        let mut config = apply_env(config, |key| std::env::var(key).ok())?;
        if self.instant_override {
            config.instant_demos = true;
        }
        if let Some(ms) = self.notification_ms_override {
            config.notifications.duration_ms = ms;
        }

        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<SiteConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 3. Defaults
        debug!("No configuration file found, using defaults");
        Ok(SiteConfig::default())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<SiteConfig>> {
        let cwd = std::env::current_dir()?;

        let nexa_json = cwd.join(FILE_NAME);
        if nexa_json.exists() {
            return Ok(Some(self.load_file(&nexa_json).await?));
        }

        let nexa_dir_config = cwd.join(".nexa").join("config.json");
        if nexa_dir_config.exists() {
            return Ok(Some(self.load_file(&nexa_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<SiteConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("nexa").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }

    /// Load from a file, or from `nexa.json` inside a directory
    async fn load_from_path(&self, path: &Path) -> Result<SiteConfig> {
        if path.is_dir() {
            let candidate = path.join(FILE_NAME);
            if candidate.exists() {
                return self.load_file(&candidate).await;
            }
            return Err(anyhow!(
                "No {} found in directory: {}",
                FILE_NAME,
                path.display()
            ));
        }
        self.load_file(path).await
    }

    async fn load_file(&self, path: &Path) -> Result<SiteConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Apply `NEXA_*` environment overrides read through `lookup`
pub fn apply_env<F>(mut config: SiteConfig, lookup: F) -> Result<SiteConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("NEXA_NOTIFICATION_MS") {
        config.notifications.duration_ms = value
            .parse()
            .with_context(|| format!("NEXA_NOTIFICATION_MS is not a number: {}", value))?;
    }

    if let Some(value) = lookup("NEXA_INSTANT_DEMOS") {
        config.instant_demos = matches!(value.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    if let Some(value) = lookup("NEXA_COUNTER_EASING") {
        config.counter.easing =
            Easing::parse(&value).ok_or_else(|| anyhow!("Unknown easing: {}", value))?;
    }

    Ok(config)
}
