use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::fx;

/// Currency-quote settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxConfig {
    /// Market-data ticker for the quoted pair.
    pub ticker: String,

    /// Rate substituted when the provider is unreachable.
    pub fallback_rate: f64,

    /// How long a fetched rate stays valid.
    pub cache_ttl_secs: u64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            ticker: fx::DEFAULT_TICKER.to_string(),
            fallback_rate: fx::DEFAULT_FALLBACK_RATE,
            cache_ttl_secs: fx::DEFAULT_CACHE_TTL.as_secs(),
        }
    }
}

impl FxConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_location = "Atlanta"
///
/// [fx]
/// ticker = "KRW=X"
/// fallback_rate = 1450.0
/// cache_ttl_secs = 3600
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional location used when a lookup omits one.
    pub default_location: Option<String>,

    #[serde(default)]
    pub fx: FxConfig,
}

impl Config {
    /// Resolve the location to query: an explicit argument wins, otherwise
    /// the configured default.
    pub fn resolve_location<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        explicit.or(self.default_location.as_deref()).ok_or_else(|| {
            anyhow!(
                "No location given and no default configured.\n\
                 Hint: pass a location or run `toolbox configure` first."
            )
        })
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "daily-toolbox", "toolbox-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_quote_usd_krw_with_hourly_cache() {
        let cfg = Config::default();
        assert_eq!(cfg.fx.ticker, "KRW=X");
        assert_eq!(cfg.fx.fallback_rate, 1450.0);
        assert_eq!(cfg.fx.cache_ttl(), Duration::from_secs(3600));
        assert!(cfg.default_location.is_none());
    }

    #[test]
    fn resolve_location_prefers_explicit() {
        let cfg = Config {
            default_location: Some("Seoul".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.resolve_location(Some("Atlanta")).unwrap(), "Atlanta");
        assert_eq!(cfg.resolve_location(None).unwrap(), "Seoul");
    }

    #[test]
    fn resolve_location_errors_when_nothing_set() {
        let cfg = Config::default();
        let err = cfg.resolve_location(None).unwrap_err();
        assert!(err.to_string().contains("Hint: pass a location"));
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            default_location: Some("30303".to_string()),
            fx: FxConfig {
                ticker: "JPY=X".to_string(),
                fallback_rate: 150.0,
                cache_ttl_secs: 600,
            },
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back.default_location.as_deref(), Some("30303"));
        assert_eq!(back.fx.ticker, "JPY=X");
        assert_eq!(back.fx.fallback_rate, 150.0);
        assert_eq!(back.fx.cache_ttl_secs, 600);
    }

    #[test]
    fn missing_fx_table_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("default_location = \"Atlanta\"\n").unwrap();
        assert_eq!(cfg.fx.ticker, "KRW=X");
        assert_eq!(cfg.fx.fallback_rate, 1450.0);
    }
}
