// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Wizard triggers go through [`dispatch`], which runs the state machine and
//! turns its [`Effect`] into a task. Everything else here is a side effect
//! the wizard asked for (or the user requested directly) and its result.

use super::{paths, App, CameraOverlay, Message};
use crate::application::orchestrator::Completion;
use crate::application::port::camera::Facing;
use crate::diagnostics::DiagnosticEventKind;
use crate::domain::image::ImageRecord;
use crate::domain::wizard::{
    Action, Effect, GenerationFailure, Slot, Submission, TransitionPhase,
};
use crate::error::{DeviceError, IngestionError};
use crate::media::{self, CaptureSession, SessionSlot, RESULT_FILE_NAME};
use crate::ui::notifications::Notification;
use crate::ui::wizard::{self, Event as WizardEvent};
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Extensions offered by the open dialog.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Wizard(message) => handle_wizard_event(app, wizard::update(message)),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(app, now);
            Task::none()
        }
        Message::FileChosen { slot, path } => match path {
            Some(path) => ingest_path(slot, path),
            // User cancelled the dialog
            None => Task::none(),
        },
        Message::FileDropped(path) => handle_file_dropped(app, path),
        Message::Ingested { slot, result } => handle_ingested(app, slot, result),
        Message::CameraOpened(result) => {
            handle_camera_opened(app, result);
            Task::none()
        }
        Message::GenerationCompleted(completion) => {
            handle_generation_completed(app, completion);
            Task::none()
        }
        Message::SaveDialogResult(path) => handle_save_dialog_result(app, path),
        Message::ResultSaved(result) => {
            match result {
                Ok(path) => app.notifications.push(
                    Notification::success("notification-save-success")
                        .with_arg("path", path.display().to_string()),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "result could not be saved");
                    app.notifications
                        .push(Notification::error("notification-save-error"));
                }
            }
            Task::none()
        }
        Message::ExportDiagnostics => export_diagnostics(app),
        Message::DiagnosticsExported(result) => {
            match result {
                Ok(path) => app.notifications.push(
                    Notification::info("notification-diagnostics-exported")
                        .with_arg("path", path.display().to_string()),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "diagnostics could not be exported");
                    app.notifications
                        .push(Notification::error("notification-diagnostics-export-error"));
                }
            }
            Task::none()
        }
    }
}

fn handle_wizard_event(app: &mut App, event: WizardEvent) -> Task<Message> {
    match event {
        WizardEvent::Dispatch(action) => dispatch(app, action),
        WizardEvent::PickFile(slot) => pick_file(app, slot),
        WizardEvent::OpenCamera(slot) => open_camera(app, slot),
        WizardEvent::SaveResult => save_result(app),
        WizardEvent::CaptureCamera => capture_camera(app),
        WizardEvent::CloseCamera => {
            close_camera(app);
            Task::none()
        }
    }
}

// =============================================================================
// Wizard dispatch
// =============================================================================

/// Feeds `action` to the state machine and runs the resulting effect.
pub(super) fn dispatch(app: &mut App, action: Action) -> Task<Message> {
    let was_exiting = app.wizard.transition().is_exiting();
    let effect = app.wizard.dispatch(action);

    if matches!(effect, Effect::Ignored) {
        tracing::debug!(step = app.wizard.effective_step().as_str(), "action ignored");
        return Task::none();
    }

    // A request arriving mid-exit retargets the running exit, it does not
    // restart it.
    if !was_exiting && app.wizard.transition().is_exiting() {
        app.phase_started = Instant::now();
    }
    sync_previews(app);
    if app.wizard.latest_submission().is_none() {
        app.generation_started = None;
    }

    match effect {
        Effect::Submit(submission) => submit(app, submission),
        Effect::Applied | Effect::Ignored => Task::none(),
    }
}

fn submit(app: &mut App, submission: Submission) -> Task<Message> {
    app.generation_started = Some(Instant::now());

    match app.orchestrator.clone() {
        Some(orchestrator) => Task::perform(
            async move { orchestrator.submit(submission).await },
            Message::GenerationCompleted,
        ),
        None => Task::done(Message::GenerationCompleted(Completion {
            id: submission.id,
            result: Err(GenerationFailure::Unexpected),
        })),
    }
}

pub(super) fn handle_generation_completed(app: &mut App, completion: Completion) {
    let Completion { id, result } = completion;

    if app.wizard.complete_generation(id, result) {
        app.generation_started = None;
        sync_previews(app);
    } else {
        tracing::info!(submission = %id, "discarding completion of a superseded submission");
        app.diagnostics
            .handle()
            .record(DiagnosticEventKind::CompletionDiscarded {
                submission: id.value(),
            });
    }
}

/// Keeps preview handles for the records the wizard currently holds.
fn sync_previews(app: &mut App) {
    let wizard = &app.wizard;
    let records = [
        wizard.person_image(),
        wizard.item_image(),
        wizard.outcome().image(),
    ];
    app.previews.sync(records.into_iter().flatten());
}

// =============================================================================
// Tick: animation, camera preview, notifications
// =============================================================================

pub(super) fn handle_tick(app: &mut App, now: Instant) {
    app.notifications.tick();
    advance_animation(app, now);
    poll_camera(app);
}

/// Sends the exit/enter completion signals once a phase has run its course.
fn advance_animation(app: &mut App, now: Instant) {
    let phase = app.wizard.transition().phase();
    if phase == TransitionPhase::Idle {
        return;
    }
    if now.saturating_duration_since(app.phase_started) < app.transition_duration.as_duration() {
        return;
    }

    match phase {
        TransitionPhase::Exiting => {
            if let Some(step) = app.wizard.finish_exit() {
                tracing::debug!(step = step.as_str(), "step committed");
                app.diagnostics
                    .handle()
                    .record(DiagnosticEventKind::StepCommitted {
                        step: step.as_str().to_string(),
                    });
                app.phase_started = now;
                sync_previews(app);
            }
        }
        TransitionPhase::Entering => app.wizard.finish_enter(),
        TransitionPhase::Idle => {}
    }
}

// =============================================================================
// File capture
// =============================================================================

fn pick_file(app: &App, slot: Slot) -> Task<Message> {
    let title = app.i18n.tr("upload-dialog-title");
    let filter = app.i18n.tr("upload-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::FileChosen { slot, path },
    )
}

fn ingest_path(slot: Slot, path: PathBuf) -> Task<Message> {
    Task::perform(media::ingest_file(path), move |result| Message::Ingested {
        slot,
        result,
    })
}

/// Drops are accepted on the two upload steps while no camera is open.
fn handle_file_dropped(app: &App, path: PathBuf) -> Task<Message> {
    if app.camera.is_some() {
        return Task::none();
    }
    match Slot::for_step(app.wizard.effective_step()) {
        Some(slot) => ingest_path(slot, path),
        None => Task::none(),
    }
}

pub(super) fn handle_ingested(
    app: &mut App,
    slot: Slot,
    result: Result<ImageRecord, IngestionError>,
) -> Task<Message> {
    match result {
        Ok(record) => {
            tracing::debug!(
                ?slot,
                media_type = record.media_type().as_str(),
                "capture ingested"
            );
            app.notifications.clear_matching("notification-read-");
            app.notifications.clear_matching("notification-camera-");
            dispatch(app, slot.ingested(record))
        }
        Err(err) => {
            tracing::warn!(?slot, error = %err, "capture could not be ingested");
            app.diagnostics
                .handle()
                .record(DiagnosticEventKind::IngestionFailed {
                    detail: err.to_string(),
                });
            app.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}

// =============================================================================
// Camera capture
// =============================================================================

fn open_camera(app: &mut App, slot: Slot) -> Task<Message> {
    if app.camera.is_some() {
        return Task::none();
    }
    if !app.camera_provider.is_available() {
        tracing::debug!("camera requested but no capture backend is available");
        return Task::none();
    }
    app.camera = Some(CameraOverlay {
        slot,
        session: None,
        frame: None,
    });

    let provider = Arc::clone(&app.camera_provider);
    Task::perform(
        async move {
            CaptureSession::open(provider.as_ref(), Facing::User)
                .await
                .map(SessionSlot::new)
        },
        Message::CameraOpened,
    )
}

pub(super) fn handle_camera_opened(app: &mut App, result: Result<SessionSlot, DeviceError>) {
    match result {
        Ok(slot) => {
            let session = slot.take();
            match app.camera.as_mut() {
                Some(overlay) if overlay.session.is_none() => overlay.session = session,
                // The overlay was closed while acquiring; dropping the
                // session releases the device.
                _ => drop(session),
            }
        }
        Err(err) => {
            app.camera = None;
            camera_failed(app, &err);
        }
    }
}

fn camera_failed(app: &mut App, err: &DeviceError) {
    tracing::warn!(error = %err, "camera unavailable");
    app.diagnostics
        .handle()
        .record(DiagnosticEventKind::CameraFailed {
            detail: err.to_string(),
        });
    app.notifications.push(Notification::error(err.i18n_key()));
}

/// Refreshes the preview frame; a failing stream closes the overlay.
fn poll_camera(app: &mut App) {
    let preview = match app
        .camera
        .as_mut()
        .and_then(|overlay| overlay.session.as_mut())
    {
        Some(session) => session.preview(),
        None => return,
    };

    match preview {
        Ok(frame) if frame.is_well_formed() => {
            if let Some(overlay) = app.camera.as_mut() {
                overlay.frame = Some(image::Handle::from_rgba(
                    frame.width,
                    frame.height,
                    frame.rgba,
                ));
            }
        }
        Ok(frame) => {
            tracing::debug!(
                width = frame.width,
                height = frame.height,
                "skipping malformed camera frame"
            );
        }
        Err(err) => {
            close_camera(app);
            camera_failed(app, &err);
        }
    }
}

fn capture_camera(app: &mut App) -> Task<Message> {
    let Some(CameraOverlay { slot, session, .. }) = app.camera.take() else {
        return Task::none();
    };
    let Some(session) = session else {
        return Task::none();
    };

    // The snapshot releases the device before encoding finishes.
    let capture = session.snapshot();
    Task::perform(
        async move { capture.and_then(media::ingest) },
        move |result| Message::Ingested { slot, result },
    )
}

pub(super) fn close_camera(app: &mut App) {
    if let Some(overlay) = app.camera.take() {
        if let Some(session) = overlay.session {
            session.cancel();
        }
    }
}

// =============================================================================
// Result download
// =============================================================================

fn save_result(app: &App) -> Task<Message> {
    if app.wizard.outcome().image().is_none() {
        return Task::none();
    }

    let title = app.i18n.tr("result-save-dialog-title");
    let directory = paths::default_download_dir();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .set_file_name(RESULT_FILE_NAME)
                .add_filter("PNG", &["png"]);

            if let Some(dir) = directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

fn handle_save_dialog_result(app: &App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    // The outcome may have changed while the dialog was open.
    let Some(record) = app.wizard.outcome().image() else {
        return Task::none();
    };

    match media::encode_png(record) {
        Ok(bytes) => Task::perform(media::write_result(bytes, path), |result| {
            Message::ResultSaved(result.map_err(|err| err.to_string()))
        }),
        Err(err) => Task::done(Message::ResultSaved(Err(err.to_string()))),
    }
}

// =============================================================================
// Diagnostics export
// =============================================================================

fn export_diagnostics(app: &App) -> Task<Message> {
    let json = match app.diagnostics.export_json() {
        Ok(json) => json,
        Err(err) => return Task::done(Message::DiagnosticsExported(Err(err.to_string()))),
    };
    let dir = paths::diagnostics_dir_with_override(app.config_dir.clone());

    Task::perform(
        async move {
            let dir = dir.ok_or_else(|| "no configuration directory".to_string())?;
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|err| err.to_string())?;
            let name = format!(
                "diagnostics-{}.json",
                chrono::Utc::now().format("%Y%m%d-%H%M%S")
            );
            let path = dir.join(name);
            tokio::fs::write(&path, json)
                .await
                .map_err(|err| err.to_string())?;
            Ok(path)
        },
        Message::DiagnosticsExported,
    )
}
