//! Credential lookup for the enhancement gateway
//!
//! The gateway is enabled exactly when a key is found. The environment
//! variable name comes from `[enhancement] api_key_env` in the config.

use pitch_core::config::EnhancementConfig;
use pitch_core::{PitchError, Result};

/// Get the API key for the configured provider
pub fn get_api_key(config: &EnhancementConfig) -> Result<String> {
    if !config.enabled {
        return Err(PitchError::Auth(
            "Enhancement is disabled in .pitch/config.toml".to_string(),
        ));
    }

    match config.api_key() {
        Some(key) => {
            tracing::debug!("Using API key from {}", config.api_key_env);
            Ok(key)
        }
        None => Err(PitchError::Auth(format!(
            "No API key found. Set {} to enable AI suggestions.",
            config.api_key_env
        ))),
    }
}
