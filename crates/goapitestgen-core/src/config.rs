//! Configuration management for Go API test generation.
//!
//! This module defines the `Config` struct describing one generation run:
//! which spec to read, which template to render, how to format the result and
//! where to write it. The configuration can be created programmatically or
//! loaded from a YAML, JSON or TOML file.
//!
//! # Examples
//!
//! ```no_run
//! use goapitestgen_core::config::Config;
//!
//! // Create a new config programmatically
//! let mut config = Config::new("swagger.json", "petstore");
//! config.output_dir = "tests".to_string();
//!
//! // Or load from a config file
//! # async fn load() -> goapitestgen_core::Result<()> {
//! let config = Config::from_file("goapitestgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::{error::Error, format::Formatter};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Template file rendered when none is configured
pub const DEFAULT_TEMPLATE_FILE: &str = "api_test_template.go.tera";

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the OpenAPI/Swagger JSON file
    pub spec_path: String,

    /// Stem of the output file name (`<base_name>_test.<extension>`)
    pub base_name: String,

    /// Template to render
    #[serde(default = "default_template_path")]
    pub template_path: String,

    /// Directory the test file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Extension of the generated file
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Formatter applied to the rendered code
    #[serde(default)]
    pub formatter: Formatter,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(spec_path: impl Into<String>, base_name: impl Into<String>) -> Self {
        Self {
            spec_path: spec_path.into(),
            base_name: base_name.into(),
            template_path: default_template_path(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            formatter: Formatter::default(),
        }
    }

    /// Load configuration from a file.
    ///
    /// The format follows the extension: `.json`, `.toml`, otherwise YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let parsed = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| Error::config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration to a file, in the format implied by its extension
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        }
        .map_err(|e| Error::config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).await.map_err(|e| {
            Error::config(format!("failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

fn default_template_path() -> String {
    DEFAULT_TEMPLATE_FILE.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    "go".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir().unwrap();

        let mut config = Config::new("swagger.json", "petstore");
        config.output_dir = "generated".to_string();
        config.formatter = Formatter::new("gofmt", vec!["-s".to_string()]);

        for file in ["config.yaml", "config.json", "config.toml"] {
            let file_path = dir.path().join(file);
            config.save(&file_path).await?;
            let loaded = Config::from_file(&file_path).await?;
            assert_eq!(loaded, config, "roundtrip through {file}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_defaults_fill_missing_fields() -> crate::Result<()> {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("minimal.yml");
        tokio::fs::write(&file_path, "spec_path: swagger.json\nbase_name: api\n")
            .await
            .unwrap();

        let config = Config::from_file(&file_path).await?;
        assert_eq!(config, Config::new("swagger.json", "api"));
        assert_eq!(config.template_path, DEFAULT_TEMPLATE_FILE);
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.extension, "go");
        assert_eq!(config.formatter.program, "goimports");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_config_is_config_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("broken.json");
        tokio::fs::write(&file_path, "{\"spec_path\": 1}").await.unwrap();

        let err = Config::from_file(&file_path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_file(dir.path().join("missing.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
