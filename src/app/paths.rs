// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`VIRTUAL_STUDIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides are initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "VirtualStudio";

const DIAGNOSTICS_DIR: &str = "diagnostics";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VIRTUAL_STUDIO_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; returns `false` for later calls.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    let stored = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !stored {
        tracing::warn!("CLI config dir override already initialized");
    }
    stored
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Holds `settings.toml`. Platform defaults:
/// - Linux: `~/.config/VirtualStudio/`
/// - macOS: `~/Library/Application Support/VirtualStudio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\VirtualStudio\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// `override_path` takes priority over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory receiving `diagnostics-*.json` exports (`<config>/diagnostics`).
pub fn diagnostics_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_config_dir_with_override(override_path).map(|path| path.join(DIAGNOSTICS_DIR))
}

/// Folder the result save dialog opens in: downloads, else pictures.
pub fn default_download_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::picture_dir)
}
