// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the wizard, its capture
//! sources and the generation backend.
//!
//! The `App` struct owns the [`Wizard`] and translates its effects into
//! side effects: file dialogs, camera sessions, generation requests and the
//! result download. Step animations are timed here and reported back to the
//! wizard through its exit/enter signals.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::orchestrator::Orchestrator;
use crate::application::port::camera::CameraProvider;
use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
use crate::domain::ui::TransitionDuration;
use crate::domain::wizard::{Slot, Wizard};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{build_generator, UnavailableCamera};
use crate::media::CaptureSession;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::wizard::PreviewCache;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// The camera overlay while it is open.
pub(crate) struct CameraOverlay {
    /// Slot the snapshot will fill.
    slot: Slot,
    /// `None` until acquisition completes.
    session: Option<CaptureSession>,
    /// Latest preview frame.
    frame: Option<image::Handle>,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    wizard: Wizard,
    /// `None` when no HTTP client could be built; submissions then fail.
    orchestrator: Option<Orchestrator>,
    camera_provider: Arc<dyn CameraProvider>,
    camera: Option<CameraOverlay>,
    previews: PreviewCache,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    theme_mode: ThemeMode,
    transition_duration: TransitionDuration,
    /// Start of the current exit or enter phase.
    phase_started: Instant,
    /// Start of the pending generation, for the spinner.
    generation_started: Option<Instant>,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("step", &self.wizard.current_step())
            .field("pending_step", &self.wizard.pending_step())
            .field("camera_open", &self.camera.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the
    // first call and defaults are used should it ever run again.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            wizard: Wizard::new(),
            orchestrator: None,
            camera_provider: Arc::new(UnavailableCamera),
            camera: None,
            previews: PreviewCache::default(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            theme_mode: ThemeMode::System,
            transition_duration: TransitionDuration::default(),
            phase_started: Instant::now(),
            generation_started: None,
            config_dir: None,
        }
    }
}

impl App {
    /// Loads the configuration, builds the generation backend and shows any
    /// startup warnings.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, flags.i18n_dir.map(PathBuf::from), &config);

        let capacity = config
            .diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new);
        let diagnostics = DiagnosticsCollector::new(capacity);

        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let settings = config.generation.backend_settings();
        let orchestrator = match build_generator(&settings) {
            Ok((generator, warning)) => {
                if let Some(key) = warning {
                    notifications.push(
                        Notification::warning(key).with_arg("env", settings.api_key_env.clone()),
                    );
                }
                Some(Orchestrator::new(generator).with_diagnostics(diagnostics.handle()))
            }
            Err(err) => {
                tracing::error!(error = %err, "generation backend unavailable");
                diagnostics
                    .handle()
                    .record(DiagnosticEventKind::Warning {
                        message: err.to_string(),
                    });
                None
            }
        };

        if let Some(orchestrator) = &orchestrator {
            tracing::info!(backend = orchestrator.backend_name(), "generation backend ready");
        }

        let app = App {
            i18n,
            orchestrator,
            notifications,
            diagnostics,
            theme_mode: config.general.theme_mode,
            transition_duration: config.animation.transition_duration(),
            config_dir,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.wizard.transition().is_animating()
            || self.wizard.outcome().is_pending()
            || self.camera.is_some();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                animating,
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests;
