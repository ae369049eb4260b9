//! Configuration settings for Titt.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub backend: BackendSettings,
    pub export: ExportSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Summarizer backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL of the summarizer backend.
    pub base_url: String,
    /// Optional per-request timeout in seconds. None means no timeout;
    /// a hung backend call then waits indefinitely.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_seconds: None,
        }
    }
}

/// PDF export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Filename for the downloaded PDF.
    pub pdf_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pdf_filename: "youtube_summary.pdf".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::TittError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("titt")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Set a configuration value by dotted key (e.g., "backend.base_url").
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::error::Result<()> {
        match key {
            "general.log_level" => self.general.log_level = value.to_string(),
            "backend.base_url" => self.backend.base_url = value.to_string(),
            "backend.request_timeout_seconds" => {
                self.backend.request_timeout_seconds = Some(value.parse().map_err(|_| {
                    crate::error::TittError::Config(format!(
                        "Expected a number of seconds, got: {}",
                        value
                    ))
                })?);
            }
            "export.pdf_filename" => self.export.pdf_filename = value.to_string(),
            _ => {
                return Err(crate::error::TittError::Config(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
