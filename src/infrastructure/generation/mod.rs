// SPDX-License-Identifier: MPL-2.0
//! Generation backends.
//!
//! Two transports implement [`CompositeGenerator`]:
//!
//! - [`direct`]: calls the Gemini REST API with a key read from the
//!   environment
//! - [`proxy`]: posts to a server-side handler that holds the key
//!
//! Both build the same stylist prompt from [`prompt`].

pub mod direct;
pub mod prompt;
pub mod proxy;

pub use direct::GeminiGenerator;
pub use proxy::ProxyGenerator;

use crate::application::port::generation::CompositeGenerator;
use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default environment variable holding the direct backend's key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Which transport carries generation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Direct,
    Proxy,
}

/// Settings needed to build a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub backend: Backend,
    pub model: String,
    pub base_url: String,
    pub endpoint: String,
    pub api_key_env: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Direct,
            model: direct::DEFAULT_MODEL.to_string(),
            base_url: direct::DEFAULT_BASE_URL.to_string(),
            endpoint: proxy::DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// Builds the configured backend.
///
/// A missing key is not fatal: the direct backend is still returned (every
/// call will fail with [`GenerationError::MissingApiKey`]) together with an
/// i18n warning key to show once at startup.
///
/// # Errors
///
/// Returns [`GenerationError::Transport`] when the HTTP client cannot be
/// built.
pub fn build_generator(
    settings: &BackendSettings,
) -> Result<(Arc<dyn CompositeGenerator>, Option<&'static str>), GenerationError> {
    match settings.backend {
        Backend::Direct => {
            let generator = GeminiGenerator::from_env(
                &settings.api_key_env,
                settings.model.clone(),
                settings.base_url.clone(),
            )?;
            let warning = if generator.is_configured() {
                None
            } else {
                tracing::warn!(
                    env = %settings.api_key_env,
                    "no API key found, generation requests will fail"
                );
                Some("notification-api-key-missing")
            };
            Ok((Arc::new(generator), warning))
        }
        Backend::Proxy => {
            tracing::info!(endpoint = %settings.endpoint, "using generation proxy");
            Ok((Arc::new(ProxyGenerator::new(settings.endpoint.clone())?), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_are_lowercase_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: Backend,
        }
        let parsed: Wrapper = toml::from_str("backend = \"proxy\"").expect("parse");
        assert_eq!(parsed.backend, Backend::Proxy);
        let parsed: Wrapper = toml::from_str("backend = \"direct\"").expect("parse");
        assert_eq!(parsed.backend, Backend::Direct);
    }

    #[test]
    fn proxy_backend_needs_no_key() {
        let settings = BackendSettings {
            backend: Backend::Proxy,
            ..BackendSettings::default()
        };
        let (generator, warning) = build_generator(&settings).expect("build");
        assert_eq!(generator.name(), "proxy");
        assert!(warning.is_none());
    }

    #[test]
    fn direct_backend_without_key_warns() {
        let settings = BackendSettings {
            api_key_env: "VIRTUAL_STUDIO_UNSET_KEY_FOR_TESTS".into(),
            ..BackendSettings::default()
        };
        let (generator, warning) = build_generator(&settings).expect("build");
        assert_eq!(generator.name(), "gemini");
        assert_eq!(warning, Some("notification-api-key-missing"));
    }
}
