// SPDX-License-Identifier: MPL-2.0
//! Loading user preferences from a hand-written `settings.toml`.
//!
//! The studio only reads this file; nothing in the app writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[generation]` - Backend, model, endpoints and the API key variable name
//! - `[animation]` - Step transition timing
//! - `[diagnostics]` - Event buffer size
//!
//! The API key itself is never stored here: only the name of the
//! environment variable that holds it.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `VIRTUAL_STUDIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use virtual_studio::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! let backend = config.generation.backend_settings();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::TransitionDuration;
use crate::error::Result;
use crate::infrastructure::generation::{Backend, BackendSettings};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Generation backend settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// `direct` calls the service with a local key, `proxy` posts to a server.
    #[serde(default)]
    pub backend: Backend,

    /// Image model used by the direct backend.
    #[serde(default = "default_model")]
    pub model: String,

    /// REST base URL of the direct backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Handler URL of the proxy backend.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the direct backend's key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            model: default_model(),
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl GenerationConfig {
    /// Converts the section into backend settings.
    #[must_use]
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            backend: self.backend,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            api_key_env: self.api_key_env.clone(),
        }
    }
}

/// Step transition settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Length of each transition phase in milliseconds (0 disables it).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
        }
    }
}

impl AnimationConfig {
    /// Phase duration, clamped to the supported range.
    #[must_use]
    pub fn transition_duration(&self) -> TransitionDuration {
        TransitionDuration::new(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_model() -> String {
    DEFAULT_GENERATION_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GENERATION_BASE_URL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_PROXY_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn hand_written_file_sets_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
theme_mode = "light"

[generation]
backend = "proxy"
endpoint = "https://studio.example/api/generate"

[animation]
transition_ms = 400

[diagnostics]
buffer_capacity = 250
"#,
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.generation.backend, Backend::Proxy);
        assert_eq!(
            loaded.generation.endpoint,
            "https://studio.example/api/generate"
        );
        assert_eq!(loaded.generation.model, DEFAULT_GENERATION_MODEL);
        assert_eq!(loaded.animation.transition_ms, Some(400));
        assert_eq!(loaded.diagnostics.buffer_capacity, Some(250));
    }

    #[test]
    fn zero_transition_from_override_directory_is_instant() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[animation]\ntransition_ms = 0\n",
        )
        .expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert!(loaded.animation.transition_duration().is_instant());
    }

    #[test]
    fn key_values_in_the_file_are_ignored() {
        let config: Config = toml::from_str(
            "[generation]\napi_key = \"sk-should-not-be-read\"\napi_key_env = \"STUDIO_KEY\"\n",
        )
        .expect("parse");
        assert_eq!(config.generation.api_key_env, "STUDIO_KEY");
        assert_eq!(config.generation, GenerationConfig {
            api_key_env: "STUDIO_KEY".into(),
            ..GenerationConfig::default()
        });
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not valid toml [[[").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.generation.backend, Backend::Direct);
        assert_eq!(config.generation.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.generation.model, DEFAULT_GENERATION_MODEL);
        assert_eq!(config.animation.transition_ms, Some(DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[generation]\nbackend = \"proxy\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.generation.backend, Backend::Proxy);
        assert_eq!(loaded.generation.endpoint, DEFAULT_PROXY_ENDPOINT);
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.animation, AnimationConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive_and_validated() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn transition_duration_is_clamped() {
        let animation = AnimationConfig {
            transition_ms: Some(60_000),
        };
        assert_eq!(
            animation.transition_duration().millis(),
            MAX_TRANSITION_MS
        );

        let animation = AnimationConfig {
            transition_ms: None,
        };
        assert_eq!(
            animation.transition_duration().millis(),
            DEFAULT_TRANSITION_MS
        );
    }

    #[test]
    fn backend_settings_mirror_the_section() {
        let generation = GenerationConfig {
            backend: Backend::Proxy,
            api_key_env: "STUDIO_KEY".into(),
            ..GenerationConfig::default()
        };
        let settings = generation.backend_settings();
        assert_eq!(settings.backend, Backend::Proxy);
        assert_eq!(settings.api_key_env, "STUDIO_KEY");
        assert_eq!(settings.endpoint, DEFAULT_PROXY_ENDPOINT);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
