// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::orchestrator::Completion;
use crate::domain::image::ImageRecord;
use crate::domain::wizard::Slot;
use crate::error::{DeviceError, IngestionError};
use crate::media::SessionSlot;
use crate::ui::notifications;
use crate::ui::wizard;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Wizard(wizard::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving step animations, the spinner, camera preview
    /// polling and notification auto-dismiss.
    Tick(Instant),
    /// Result from the open file dialog.
    FileChosen {
        slot: Slot,
        path: Option<PathBuf>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A capture finished ingesting.
    Ingested {
        slot: Slot,
        result: Result<ImageRecord, IngestionError>,
    },
    /// Camera acquisition finished.
    CameraOpened(Result<SessionSlot, DeviceError>),
    /// A generation request completed (possibly superseded).
    GenerationCompleted(Completion),
    /// Result from the save dialog for the generated composite.
    SaveDialogResult(Option<PathBuf>),
    /// The composite was written to disk.
    ResultSaved(Result<PathBuf, String>),
    /// Keyboard shortcut: write the diagnostics buffer to the config dir.
    ExportDiagnostics,
    DiagnosticsExported(Result<PathBuf, String>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIRTUAL_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
