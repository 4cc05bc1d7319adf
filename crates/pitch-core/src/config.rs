//! Configuration management for pitch
//!
//! Settings for the enhancement gateway, export location and report layout,
//! loaded from `.pitch/config.toml` when present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PitchError, Result};

/// Project-level pitch configuration
///
/// Loaded from `.pitch/config.toml` in the working directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Language model enhancement settings
    #[serde(default)]
    pub enhancement: EnhancementConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Terminal report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Enhancement gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementConfig {
    /// Allow model calls when a credential is available
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API base URL (chat completions are posted to `{base_url}/chat/completions`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Report layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Column at which report paragraphs wrap
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

// Default value providers
fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_wrap_width() -> usize {
    65
}

impl PitchConfig {
    /// Path of the config file under `root`
    pub fn path(root: &Path) -> PathBuf {
        root.join(".pitch/config.toml")
    }

    /// Load configuration from `.pitch/config.toml` or use defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = Self::path(root);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| PitchError::Config(format!("Failed to parse config file: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.pitch/config.toml`
    pub fn write_default(root: &Path) -> Result<PathBuf> {
        let config_dir = root.join(".pitch");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = Self::path(root);
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| PitchError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }
}

impl EnhancementConfig {
    /// Read the API key from the configured environment variable
    ///
    /// Returns `None` when enhancement is switched off or the variable is
    /// unset or blank.
    pub fn api_key(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PitchConfig::default();
        assert!(config.enhancement.enabled);
        assert_eq!(config.enhancement.model, "gpt-4o-mini");
        assert_eq!(config.enhancement.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.report.wrap_width, 65);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PitchConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, PitchConfig::default());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = PitchConfig::write_default(dir.path()).unwrap();
        assert!(path.ends_with(".pitch/config.toml"));

        let config = PitchConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, PitchConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".pitch")).unwrap();
        std::fs::write(
            PitchConfig::path(dir.path()),
            "[enhancement]\nmodel = \"gpt-4o\"\n\n[report]\nwrap_width = 80\n",
        )
        .unwrap();

        let config = PitchConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.enhancement.model, "gpt-4o");
        assert_eq!(config.enhancement.timeout_secs, 30);
        assert_eq!(config.report.wrap_width, 80);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".pitch")).unwrap();
        std::fs::write(PitchConfig::path(dir.path()), "report = [").unwrap();

        let result = PitchConfig::load_or_default(dir.path());
        assert!(matches!(result, Err(PitchError::Config(_))));
    }

    #[test]
    fn test_disabled_enhancement_has_no_key() {
        let config = EnhancementConfig {
            enabled: false,
            api_key_env: "PATH".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_unset_key_env() {
        let config = EnhancementConfig {
            api_key_env: "PITCH_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }
}
