use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use workbench_catalog::DocumentKind;

pub const DEFAULT_CONFIG_NAME: &str = "workbench.config.json";

/// How listings and previews are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored when the terminal allows it
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Workbench configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Document kind used when `--kind` is not given
    #[serde(default)]
    pub default_kind: DocumentKind,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub preview_format: OutputFormat,

    /// Fallback log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Write config into a directory, returning the file path
    pub fn save(&self, cwd: &Path) -> anyhow::Result<PathBuf> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(&config_path, json)?;
        Ok(config_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_kind: DocumentKind::default(),
            preview_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "defaultKind": "block",
            "previewFormat": "json",
            "logLevel": "debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_kind, DocumentKind::Block);
        assert_eq!(config.preview_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_kind, DocumentKind::Item);
        assert_eq!(config.preview_format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            default_kind: DocumentKind::Recipe,
            preview_format: OutputFormat::Json,
            log_level: "info".to_string(),
        };

        let path = config.save(dir.path()).unwrap();
        assert!(path.ends_with(DEFAULT_CONFIG_NAME));
        assert_eq!(Config::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
