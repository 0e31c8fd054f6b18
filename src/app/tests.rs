// SPDX-License-Identifier: MPL-2.0
//! Update-loop tests: effects, animation timing, camera lifetime and
//! stale completions. Tasks are not executed; their results are fed back
//! as messages by hand.

use super::update::{self, dispatch};
use super::{App, Message};
use crate::application::orchestrator::Completion;
use crate::application::port::camera::{CameraFrame, CameraProvider, Facing, VideoStream};
use crate::diagnostics::DiagnosticEventKind;
use crate::domain::category::Category;
use crate::domain::image::{ImageRecord, MediaType};
use crate::domain::wizard::{Action, GenerationFailure, Slot, Step};
use crate::error::{DeviceError, IngestionError};
use crate::media::{CaptureSession, SessionSlot};
use crate::ui::wizard;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn record() -> ImageRecord {
    ImageRecord::new(
        Arc::from(&[0x89, b'P', b'N', b'G'][..]),
        "iVBORw==",
        MediaType::new("image/png"),
        Some((1, 1)),
    )
}

/// Ticks far enough in the future to finish the exit and then the enter
/// phase, each tick a full phase after the previous one.
fn settle(app: &mut App) {
    let base = Instant::now();
    for step in 1..=2 {
        let later = base + Duration::from_secs(10) * step;
        let _ = update::update(app, Message::Tick(later));
    }
}

fn send(app: &mut App, message: Message) {
    let _ = update::update(app, message);
    settle(app);
}

fn wizard_message(app: &mut App, message: wizard::Message) {
    send(app, Message::Wizard(message));
}

fn ingested(app: &mut App, slot: Slot) {
    send(
        app,
        Message::Ingested {
            slot,
            result: Ok(record()),
        },
    );
}

fn app_at_result() -> App {
    let mut app = App::default();
    settle(&mut app);
    wizard_message(&mut app, wizard::Message::GetStarted);
    ingested(&mut app, Slot::Person);
    wizard_message(&mut app, wizard::Message::ChooseCategory(Category::Shirt));
    ingested(&mut app, Slot::Item);
    app
}

fn events(app: &App) -> Vec<DiagnosticEventKind> {
    app.diagnostics
        .snapshot()
        .into_iter()
        .map(|event| event.kind)
        .collect()
}

#[derive(Default)]
struct StopCounter(AtomicUsize);

struct CountingStream(Arc<StopCounter>);

impl VideoStream for CountingStream {
    fn current_frame(&mut self) -> Result<CameraFrame, DeviceError> {
        Ok(CameraFrame {
            width: 2,
            height: 2,
            rgba: vec![255; 16],
        })
    }

    fn stop(&mut self) {
        self.0 .0.fetch_add(1, Ordering::SeqCst);
    }
}

fn session() -> (SessionSlot, Arc<StopCounter>) {
    let counter = Arc::new(StopCounter::default());
    let session = CaptureSession::from_stream(
        Box::new(CountingStream(Arc::clone(&counter))),
        Facing::User,
    );
    (SessionSlot::new(session), counter)
}

fn stops(counter: &StopCounter) -> usize {
    counter.0.load(Ordering::SeqCst)
}

/// A provider that reports a device; sessions are fed in by hand.
struct AttachedCamera;

#[async_trait]
impl CameraProvider for AttachedCamera {
    async fn acquire(&self, _facing: Facing) -> Result<Box<dyn VideoStream>, DeviceError> {
        Err(DeviceError::NoDevice)
    }
}

/// An app on the person upload step with a camera attached.
fn app_with_camera() -> App {
    let mut app = App {
        camera_provider: Arc::new(AttachedCamera),
        ..App::default()
    };
    settle(&mut app);
    wizard_message(&mut app, wizard::Message::GetStarted);
    app
}

// -----------------------------------------------------------------------------
// Wizard flow
// -----------------------------------------------------------------------------

#[test]
fn exit_phase_commits_only_after_the_transition_duration() {
    let mut app = App::default();
    settle(&mut app);

    let _ = dispatch(&mut app, Action::Advance);
    assert_eq!(app.wizard.current_step(), Step::Start);
    assert_eq!(app.wizard.pending_step(), Some(Step::UploadPerson));

    // A tick before the phase is over changes nothing.
    let started = app.phase_started;
    update::handle_tick(&mut app, started);
    assert_eq!(app.wizard.current_step(), Step::Start);

    settle(&mut app);
    assert_eq!(app.wizard.current_step(), Step::UploadPerson);
    assert!(!app.wizard.transition().is_animating());
    assert!(events(&app).contains(&DiagnosticEventKind::StepCommitted {
        step: "upload_person".to_string()
    }));
}

#[test]
fn item_capture_reaches_result_with_pending_generation() {
    let app = app_at_result();
    assert_eq!(app.wizard.current_step(), Step::Result);
    assert!(app.wizard.outcome().is_pending());
    assert!(app.generation_started.is_some());
    assert_eq!(app.previews.len(), 2);
}

#[test]
fn generation_result_is_shown_and_cached() {
    let mut app = app_at_result();
    let id = app.wizard.latest_submission().expect("submitted");

    send(
        &mut app,
        Message::GenerationCompleted(Completion {
            id,
            result: Ok(record()),
        }),
    );

    assert!(app.wizard.outcome().image().is_some());
    assert!(app.generation_started.is_none());
    assert_eq!(app.previews.len(), 3);
}

#[test]
fn superseded_completion_is_discarded_and_recorded() {
    let mut app = app_at_result();
    let latest = app.wizard.latest_submission().expect("submitted");

    // Go back and submit again so the first tag is superseded.
    wizard_message(&mut app, wizard::Message::Back);
    ingested(&mut app, Slot::Item);
    let newest = app.wizard.latest_submission().expect("resubmitted");
    assert_ne!(newest, latest);

    send(
        &mut app,
        Message::GenerationCompleted(Completion {
            id: latest,
            result: Err(GenerationFailure::NoImage),
        }),
    );
    assert!(app.wizard.outcome().is_pending());
    assert!(events(&app).contains(&DiagnosticEventKind::CompletionDiscarded {
        submission: latest.value()
    }));

    send(
        &mut app,
        Message::GenerationCompleted(Completion {
            id: newest,
            result: Ok(record()),
        }),
    );
    assert!(app.wizard.outcome().image().is_some());
}

#[test]
fn missing_backend_fails_the_submission_without_leaving_result() {
    let mut app = app_at_result();
    assert!(app.orchestrator.is_none());
    let id = app.wizard.latest_submission().expect("submitted");

    send(
        &mut app,
        Message::GenerationCompleted(Completion {
            id,
            result: Err(GenerationFailure::Unexpected),
        }),
    );
    assert_eq!(
        app.wizard.outcome().failure(),
        Some(GenerationFailure::Unexpected)
    );
    assert_eq!(app.wizard.current_step(), Step::Result);
}

#[test]
fn start_over_clears_previews_after_exit() {
    let mut app = app_at_result();
    wizard_message(&mut app, wizard::Message::StartOver);
    assert_eq!(app.wizard.current_step(), Step::Start);
    assert!(app.previews.is_empty());
}

#[test]
fn back_during_try_another_item_exit_lands_without_the_item() {
    let mut app = app_at_result();
    let abandoned = app.wizard.latest_submission().expect("submitted");

    let _ = update::update(&mut app, Message::Wizard(wizard::Message::TryAnotherItem));
    let _ = update::update(&mut app, Message::Wizard(wizard::Message::Back));
    let _ = update::update(
        &mut app,
        Message::GenerationCompleted(Completion {
            id: abandoned,
            result: Ok(record()),
        }),
    );
    settle(&mut app);

    assert_eq!(app.wizard.current_step(), Step::SelectCategory);
    assert!(app.wizard.item_image().is_none());
    assert!(app.wizard.outcome().image().is_none());
    assert_eq!(app.previews.len(), 1);
    assert!(events(&app).contains(&DiagnosticEventKind::CompletionDiscarded {
        submission: abandoned.value()
    }));
}

// -----------------------------------------------------------------------------
// Ingestion failures
// -----------------------------------------------------------------------------

#[test]
fn read_failure_notifies_and_keeps_the_step() {
    let mut app = App::default();
    settle(&mut app);
    wizard_message(&mut app, wizard::Message::GetStarted);

    send(
        &mut app,
        Message::Ingested {
            slot: Slot::Person,
            result: Err(IngestionError::ReadFailure("gone".into())),
        },
    );

    assert_eq!(app.wizard.current_step(), Step::UploadPerson);
    assert_eq!(app.notifications.visible_count(), 1);
    assert!(matches!(
        events(&app).last(),
        Some(DiagnosticEventKind::IngestionFailed { .. })
    ));
}

#[test]
fn file_drop_outside_upload_steps_is_ignored() {
    let mut app = App::default();
    settle(&mut app);
    send(&mut app, Message::FileDropped("/tmp/person.png".into()));
    assert_eq!(app.wizard.current_step(), Step::Start);
}

// -----------------------------------------------------------------------------
// Camera
// -----------------------------------------------------------------------------

#[test]
fn camera_request_without_a_backend_opens_nothing() {
    let mut app = App::default();
    settle(&mut app);
    wizard_message(&mut app, wizard::Message::GetStarted);
    wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));

    assert!(app.camera.is_none());
    assert!(!app.notifications.has_notifications());
    assert_eq!(app.wizard.current_step(), Step::UploadPerson);
}

#[test]
fn camera_permission_failure_closes_overlay_and_keeps_step() {
    let mut app = app_with_camera();
    wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));
    assert!(app.camera.is_some());

    send(
        &mut app,
        Message::CameraOpened(Err(DeviceError::PermissionDenied)),
    );

    assert!(app.camera.is_none());
    assert_eq!(app.wizard.current_step(), Step::UploadPerson);
    assert_eq!(app.notifications.visible_count(), 1);
}

#[test]
fn cancel_releases_the_device() {
    let mut app = app_with_camera();
    wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));

    let (slot, counter) = session();
    send(&mut app, Message::CameraOpened(Ok(slot)));
    assert!(app
        .camera
        .as_ref()
        .is_some_and(|overlay| overlay.frame.is_some()));

    wizard_message(&mut app, wizard::Message::CancelCamera);
    assert!(app.camera.is_none());
    assert_eq!(stops(&counter), 1);
}

#[test]
fn capture_releases_the_device() {
    let mut app = app_with_camera();
    wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));

    let (slot, counter) = session();
    send(&mut app, Message::CameraOpened(Ok(slot)));
    wizard_message(&mut app, wizard::Message::TakePhoto);

    assert!(app.camera.is_none());
    assert_eq!(stops(&counter), 1);
}

#[test]
fn session_arriving_after_cancel_is_released() {
    let mut app = app_with_camera();
    wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));
    wizard_message(&mut app, wizard::Message::CancelCamera);

    let (slot, counter) = session();
    send(&mut app, Message::CameraOpened(Ok(slot)));
    assert!(app.camera.is_none());
    assert_eq!(stops(&counter), 1);
}

#[test]
fn teardown_releases_the_device() {
    let (slot, counter) = session();
    {
        let mut app = app_with_camera();
        wizard_message(&mut app, wizard::Message::UseCamera(Slot::Person));
        send(&mut app, Message::CameraOpened(Ok(slot)));
        assert_eq!(stops(&counter), 0);
    }
    assert_eq!(stops(&counter), 1);
}
