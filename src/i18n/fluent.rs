// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for the embedded (or overridden) `.ftl` files.
//!
//! Translations are embedded at build time from `assets/i18n/`. A directory
//! passed with `--i18n-dir` replaces the embedded set, which lets
//! translators try a file without rebuilding.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads every available translation and picks the active locale.
    ///
    /// Locale priority: CLI flag, config file, OS locale, `en-US`.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<PathBuf>, config: &Config) -> Self {
        let sources = match i18n_dir.as_deref().map(read_dir_sources) {
            Some(sources) if !sources.is_empty() => sources,
            Some(_) => {
                tracing::warn!("no .ftl files in the i18n directory, using embedded translations");
                embedded_sources()
            }
            None => embedded_sources(),
        };

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, source) in sources {
            if let Some(bundle) = build_bundle(&locale, source) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);
        tracing::debug!(locale = %current_locale, "selected UI locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates `key`, or returns `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with Fluent arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return format!("MISSING: {}", key);
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {}", key);
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            value.to_string()
        } else {
            tracing::debug!(key, ?errors, "fluent formatting errors");
            format!("MISSING: {}", key)
        }
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_file_name(file_name: &str) -> Option<LanguageIdentifier> {
    file_name.strip_suffix(".ftl")?.parse().ok()
}

fn embedded_sources() -> Vec<(LanguageIdentifier, String)> {
    Asset::iter()
        .filter_map(|file| {
            let locale = locale_from_file_name(file.as_ref())?;
            let content = Asset::get(file.as_ref())?;
            Some((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()))
        })
        .collect()
}

fn read_dir_sources(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read i18n directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let locale = locale_from_file_name(&name)?;
            let content = std::fs::read_to_string(entry.path()).ok()?;
            Some((locale, content))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, ?errors, "skipping unparsable translation file");
            return None;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks render as boxes in some fonts.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "translation file has duplicate messages");
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(pick)
        .or_else(|| config.general.language.as_deref().and_then(pick))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(pick))
        .or_else(|| pick(DEFAULT_LOCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_language_falls_through() {
        let lang = resolve_locale(Some("de".to_string()), &Config::default(), &available());
        assert!(available().contains(&lang.expect("some locale")));
    }

    #[test]
    fn default_locale_is_en_us() {
        assert_eq!(default_locale(), "en-US".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn embedded_translations_cover_both_locales() {
        let i18n = I18n::new(Some("fr".into()), None, &Config::default());
        assert_eq!(i18n.available_locales().len(), 2);
        assert_eq!(i18n.current_locale(), &"fr".parse::<LanguageIdentifier>().unwrap());
        assert!(!i18n.tr("app-title").starts_with("MISSING"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let text = i18n.tr_with_args("notification-save-success", &[("path", "/tmp/out.png")]);
        assert!(text.contains("/tmp/out.png"));
    }

    #[test]
    fn directory_override_replaces_embedded_files() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("en-US.ftl"), "app-title = Test Studio\n").expect("write");

        let i18n = I18n::new(
            Some("en-US".into()),
            Some(dir.path().to_path_buf()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("app-title"), "Test Studio");
        assert_eq!(i18n.available_locales().len(), 1);
    }
}
