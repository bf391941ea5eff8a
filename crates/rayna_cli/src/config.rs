//! `rayna.toml` handling
//!
//! Every section and key is optional; a missing file means all defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayna_app::AppSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "rayna.toml";

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RaynaConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "rayna".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { name: default_name() }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Output directory for `rayna export`
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Indent the exported markup
    #[serde(default)]
    pub pretty: bool,
}

fn default_dir() -> String {
    "dist".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            pretty: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
}

fn default_max_size_mb() -> u64 {
    5
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ToastConfig {
    /// Auto-dismiss delay; 0 keeps toasts until closed
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    5000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl RaynaConfig {
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!(path = %path.display(), "no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The knobs the demo pages read
    pub fn settings(&self) -> AppSettings {
        AppSettings {
            max_upload_size: self.upload.max_size_mb.saturating_mul(MIB),
            toast_duration_ms: self.toast.duration_ms,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RaynaConfig::parse("").unwrap();
        assert_eq!(config.project.name, "rayna");
        assert_eq!(config.export.dir, "dist");
        assert!(!config.export.pretty);
        assert_eq!(config.settings(), AppSettings::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = RaynaConfig::parse(
            r#"
            [upload]
            max_size_mb = 10

            [toast]
            duration_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.settings().max_upload_size, 10 * MIB);
        assert_eq!(config.settings().toast_duration_ms, 0);
        assert_eq!(config.project.name, "rayna");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = std::env::temp_dir().join("rayna-config-missing");
        let config = RaynaConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.toast.duration_ms, 5000);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let text = RaynaConfig::default().to_toml().unwrap();
        assert!(text.contains("[export]"));
        assert_eq!(RaynaConfig::parse(&text).unwrap().export.dir, "dist");
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(RaynaConfig::parse("[upload]\nmax_size_mb = \"big\"").is_err());
    }
}
