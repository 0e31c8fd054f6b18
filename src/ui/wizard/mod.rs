// SPDX-License-Identifier: MPL-2.0
//! The try-on wizard screen.
//!
//! The screen is a pure function of the [`Wizard`] state plus a few render
//! inputs (preview handles, animation progress, the camera frame). Every
//! control emits a [`Message`], which [`update`] turns into an [`Event`]
//! for the application: either a wizard [`Action`] to dispatch or a side
//! effect (file dialog, camera, save dialog) to run.

mod camera;
pub mod preview;
mod steps;
pub mod transition;

pub use preview::PreviewCache;
pub use transition::StepVisual;

use crate::domain::category::Category;
use crate::domain::wizard::{Action, Slot, Step, Wizard};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{image, opaque, text, Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Color, Element, Length, Theme};
use std::time::Duration;

/// Messages emitted by the wizard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GetStarted,
    Back,
    UploadFile(Slot),
    UseCamera(Slot),
    ChooseCategory(Category),
    Download,
    TryAnotherItem,
    StartOver,
    TakePhoto,
    CancelCamera,
}

/// What the application has to do in response to a [`Message`].
#[derive(Debug, Clone)]
pub enum Event {
    /// Feed this trigger to the state machine.
    Dispatch(Action),
    /// Open a file dialog and ingest the chosen file into the slot.
    PickFile(Slot),
    /// Open the camera overlay for the slot.
    OpenCamera(Slot),
    /// Save the generated composite.
    SaveResult,
    /// Snapshot the camera and close the overlay.
    CaptureCamera,
    /// Close the camera overlay without capturing.
    CloseCamera,
}

/// Maps a screen message to the event the application handles.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::GetStarted => Event::Dispatch(Action::Advance),
        Message::Back => Event::Dispatch(Action::Back),
        Message::ChooseCategory(category) => Event::Dispatch(Action::CategoryChosen(category)),
        Message::TryAnotherItem => Event::Dispatch(Action::TryAnotherItem),
        Message::StartOver => Event::Dispatch(Action::StartOver),
        Message::UploadFile(slot) => Event::PickFile(slot),
        Message::UseCamera(slot) => Event::OpenCamera(slot),
        Message::Download => Event::SaveResult,
        Message::TakePhoto => Event::CaptureCamera,
        Message::CancelCamera => Event::CloseCamera,
    }
}

/// The open camera overlay.
#[derive(Debug, Clone, Copy)]
pub struct CameraView<'a> {
    /// Latest preview frame; `None` until the first frame arrives.
    pub frame: Option<&'a image::Handle>,
}

/// Everything needed to render the wizard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub wizard: &'a Wizard,
    pub previews: &'a PreviewCache,
    /// Offset and opacity of the current step.
    pub visual: StepVisual,
    /// Window background, used to fade steps in and out.
    pub backdrop: Color,
    /// Time since the pending generation started.
    pub waiting_for: Duration,
    pub camera: Option<CameraView<'a>>,
    /// Whether the upload steps offer the camera.
    pub camera_available: bool,
}

/// Renders the header, the current step and the camera overlay.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let step: Element<'_, Message> = match ctx.wizard.current_step() {
        Step::Start => steps::start(ctx.i18n),
        Step::UploadPerson => steps::upload(&ctx, Slot::Person),
        Step::SelectCategory => steps::category(&ctx),
        Step::UploadItem => steps::upload(&ctx, Slot::Item),
        Step::Result => steps::result(&ctx),
    };

    let body = transition::apply(
        Container::new(step)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
        ctx.visual,
        ctx.backdrop,
    );

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header(ctx.i18n))
        .push(body);

    match ctx.camera {
        Some(camera_view) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(opaque(camera::overlay(ctx.i18n, camera_view)))
            .into(),
        None => page.into(),
    }
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });
    let tagline = Text::new(i18n.tr("app-tagline"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(title)
        .push(tagline)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_messages_become_wizard_actions() {
        assert!(matches!(
            update(Message::GetStarted),
            Event::Dispatch(Action::Advance)
        ));
        assert!(matches!(update(Message::Back), Event::Dispatch(Action::Back)));
        assert!(matches!(
            update(Message::ChooseCategory(Category::Shoes)),
            Event::Dispatch(Action::CategoryChosen(Category::Shoes))
        ));
        assert!(matches!(
            update(Message::TryAnotherItem),
            Event::Dispatch(Action::TryAnotherItem)
        ));
        assert!(matches!(
            update(Message::StartOver),
            Event::Dispatch(Action::StartOver)
        ));
    }

    #[test]
    fn capture_messages_keep_their_slot() {
        assert!(matches!(
            update(Message::UploadFile(Slot::Item)),
            Event::PickFile(Slot::Item)
        ));
        assert!(matches!(
            update(Message::UseCamera(Slot::Person)),
            Event::OpenCamera(Slot::Person)
        ));
    }

    #[test]
    fn side_effect_messages_map_to_side_effects() {
        assert!(matches!(update(Message::Download), Event::SaveResult));
        assert!(matches!(update(Message::TakePhoto), Event::CaptureCamera));
        assert!(matches!(update(Message::CancelCamera), Event::CloseCamera));
    }
}
