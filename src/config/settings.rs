//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::SiterecError;

/// Environment variable that overrides `general.recordings_dir`
pub const RECORDINGS_DIR_ENV: &str = "SITEREC_RECORDINGS_DIR";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Filename settings
    #[serde(default)]
    pub naming: NamingSettings,

    /// Interface settings
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for the log file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Explicit recordings directory (unset = platform default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recordings_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingSettings {
    /// Placeholder used when the project name is blank (unset = localized default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,

    /// Placeholder used when the component name is blank (unset = localized default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_component: Option<String>,

    /// File extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Interface language (en, zh)
    #[serde(default)]
    pub language: Language,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SiterecError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "zh" | "chinese" | "zh-cn" => Ok(Self::Zh),
            other => Err(SiterecError::Config(format!(
                "unsupported language '{}' (expected en or zh)",
                other
            ))),
        }
    }
}

// Default value functions

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "siterec", "siterec")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/siterec"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_extension() -> String {
    "wav".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            recordings_dir: None,
        }
    }
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            default_project: None,
            default_component: None,
            extension: default_extension(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from a specific file without applying overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(RECORDINGS_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.general.recordings_dir = Some(PathBuf::from(dir));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = project_dirs().context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.general.data_dir.join("siterec.log")
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Placeholder for a blank project name
    pub fn project_placeholder(&self) -> String {
        self.naming
            .default_project
            .clone()
            .unwrap_or_else(|| match self.ui.language {
                Language::En => "project".to_string(),
                Language::Zh => "项目".to_string(),
            })
    }

    /// Placeholder for a blank component name
    pub fn component_placeholder(&self) -> String {
        self.naming
            .default_component
            .clone()
            .unwrap_or_else(|| match self.ui.language {
                Language::En => "component".to_string(),
                Language::Zh => "构件".to_string(),
            })
    }
}
