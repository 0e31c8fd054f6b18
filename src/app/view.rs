// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Computes the per-frame render inputs (step visual, spinner time, camera
//! frame) and stacks the toast overlay over the wizard screen.

use super::{App, Message};
use crate::domain::wizard::TransitionPhase;
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::wizard::{self, transition, CameraView, ViewContext};
use iced::widget::{Container, Stack};
use iced::{Background, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Renders the wizard with notifications on top.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();
    let theme = app.theme_mode.theme();

    let ctx = ViewContext {
        i18n: &app.i18n,
        wizard: &app.wizard,
        previews: &app.previews,
        visual: transition::visual(app.wizard.transition(), phase_progress(app, now)),
        backdrop: backdrop_color(&theme),
        waiting_for: app
            .generation_started
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started)),
        camera: app.camera.as_ref().map(|overlay| CameraView {
            frame: overlay.frame.as_ref(),
        }),
        camera_available: app.camera_provider.is_available(),
    };

    let screen = Container::new(wizard::view(ctx).map(Message::Wizard))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}

/// Fraction of the current phase already played, in `0.0..=1.0`.
fn phase_progress(app: &App, now: Instant) -> f32 {
    if app.wizard.transition().phase() == TransitionPhase::Idle {
        return 1.0;
    }
    let total = app.transition_duration.as_duration();
    if total.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(app.phase_started);
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}

fn backdrop_color(theme: &Theme) -> Color {
    match styles::container::backdrop(theme).background {
        Some(Background::Color(color)) => color,
        _ => Color::BLACK,
    }
}
