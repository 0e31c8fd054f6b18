// SPDX-License-Identifier: MPL-2.0
use virtual_studio::app::config::{self, Config};
use virtual_studio::i18n::fluent::I18n;
use virtual_studio::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("start-button"), "Get Started");

    // 2. The user edits the file to French
    fs::write(&temp_config_file_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("start-button"), i18n_en.tr("start-button"));
}

#[test]
fn test_hand_written_settings_file_is_honoured() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Dark"

[generation]
backend = "proxy"
endpoint = "http://localhost:8787/api/generate"

[animation]
transition_ms = 120
"#,
    )
    .expect("Failed to write settings file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(
        loaded.generation.endpoint,
        "http://localhost:8787/api/generate"
    );
    assert_eq!(
        loaded.animation.transition_duration().as_duration(),
        Duration::from_millis(120)
    );
    // Untouched sections keep their defaults.
    assert_eq!(loaded.diagnostics, Config::default().diagnostics);
}
