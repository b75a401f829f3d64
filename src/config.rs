//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes `config.toml`, extracting the embedded default on first run,
//! and validates the values the renderers depend on.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod validator;

// Embed default configuration at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable that overrides the data directory
pub const DIR_ENV_VAR: &str = "HEALTHBAR_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub healthbar: HealthbarConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Host screen settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme: "dark" or "light"
    pub theme: String,
    /// Event poll timeout in milliseconds
    pub poll_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            poll_timeout_ms: 16,
        }
    }
}

/// Appearance of the draggable healthbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthbarConfig {
    pub title: String,
    pub show_border: bool,
    pub border_style: String,
    /// Print the value centered on the bar
    pub show_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Default for HealthbarConfig {
    fn default() -> Self {
        Self {
            title: "HP".to_string(),
            show_border: true,
            border_style: "rounded".to_string(),
            show_value: true,
            fill_color: None,
            background_color: None,
        }
    }
}

/// Console healthbar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Number of segments in the bar
    pub length: u16,
    /// Value that represents a full bar
    pub max_value: f64,
    /// Redraw interval in milliseconds
    pub interval_ms: u64,
    pub glyphs: ConsoleGlyphs,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            length: 100,
            max_value: 100.0,
            interval_ms: 100,
            glyphs: ConsoleGlyphs::default(),
        }
    }
}

/// Characters used to draw the console bar.
/// Per-position glyphs fall back to `corner`, `vertical` and `horizontal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleGlyphs {
    pub fill: String,
    pub empty: String,
    pub corner: String,
    pub vertical: String,
    pub horizontal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<String>,
}

impl Default for ConsoleGlyphs {
    fn default() -> Self {
        Self {
            fill: "#".to_string(),
            empty: " ".to_string(),
            corner: "+".to_string(),
            vertical: "|".to_string(),
            horizontal: "-".to_string(),
            top_left: None,
            top: None,
            top_right: None,
            left: None,
            right: None,
            bottom_left: None,
            bottom: None,
            bottom_right: None,
        }
    }
}

impl Config {
    /// Parse config from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Load config from the data directory, extracting defaults on first run
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        // Validate and auto-fix values the renderers can't work with
        let validation = validator::validate_config(&config);
        let errors = validation.errors();
        if !errors.is_empty() {
            tracing::warn!("Config validation found {} errors", errors.len());
            for error in &errors {
                tracing::warn!("  {}", error.message());
            }

            let fixed = validator::auto_fix_config(&mut config, &validation.issues);
            if fixed > 0 {
                tracing::info!("Auto-fixed {} config issues", fixed);
            }
        }
        for warning in validation.warnings() {
            tracing::warn!("Config warning: {}", warning.message());
        }

        Ok(config)
    }

    /// Write the embedded default config if none exists yet (idempotent)
    fn extract_defaults() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).context(format!("Failed to create {:?}", dir))?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted config.toml to {:?}", config_path);
        }

        Ok(())
    }

    /// Get the base healthbar directory (~/.healthbar/)
    /// Can be overridden with the HEALTHBAR_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV_VAR) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".healthbar"))
    }

    /// Returns: ~/.healthbar/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::from_toml(DEFAULT_CONFIG).expect("embedded default parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
[ui]
theme = "light"

[console.glyphs]
fill = "="
"#,
        )
        .expect("partial config parses");

        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.healthbar.title, "HP");
        assert_eq!(config.console.length, 100);
        assert_eq!(config.console.glyphs.fill, "=");
        assert_eq!(config.console.glyphs.corner, "+");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").expect("empty config parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config_errors() {
        assert!(Config::from_toml("[console]\nlength = -4").is_err());
        assert!(Config::from_toml("[ui\ntheme = 1").is_err());
    }

    #[test]
    fn test_toml_serialization_roundtrip() {
        let mut config = Config::default();
        config.healthbar.fill_color = Some("#00ff00".to_string());
        config.console.glyphs.top_left = Some("/".to_string());

        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize config");
        assert!(toml_str.contains("fill_color"));
        assert!(!toml_str.contains("background_color"));

        let parsed = Config::from_toml(&toml_str).expect("serialized config parses");
        assert_eq!(parsed, config);
    }
}
