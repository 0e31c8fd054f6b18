// SPDX-License-Identifier: MPL-2.0
//! Step change visuals.
//!
//! A step slides out while fading, the next one slides in from the opposite
//! side. Forward moves content to the left, backward to the right.

use crate::domain::wizard::{Direction, Transition, TransitionPhase};
use iced::widget::{Container, Space, Stack};
use iced::{Color, Element, Length, Padding};

/// Horizontal travel of a sliding step, in logical pixels.
pub const SLIDE_DISTANCE: f32 = 48.0;

/// Offset and opacity of the step content for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepVisual {
    /// Horizontal shift; negative is to the left.
    pub offset: f32,
    /// `0.0` (hidden) to `1.0` (fully visible).
    pub opacity: f32,
}

impl StepVisual {
    pub const RESTING: StepVisual = StepVisual {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Cubic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Computes the visual for `transition` at `progress` (`0.0..=1.0`) through
/// its current phase.
#[must_use]
pub fn visual(transition: Transition, progress: f32) -> StepVisual {
    let t = ease_out(progress.clamp(0.0, 1.0));
    let sign = match transition.direction() {
        Direction::Forward => -1.0,
        Direction::Backward => 1.0,
    };

    match transition.phase() {
        TransitionPhase::Idle => StepVisual::RESTING,
        TransitionPhase::Exiting => StepVisual {
            offset: sign * SLIDE_DISTANCE * t,
            opacity: 1.0 - t,
        },
        TransitionPhase::Entering => StepVisual {
            offset: -sign * SLIDE_DISTANCE * (1.0 - t),
            opacity: t,
        },
    }
}

/// Shifts `content` by the visual's offset and fades it into `backdrop`.
pub fn apply<'a, Message: 'a>(
    content: Element<'a, Message>,
    visual: StepVisual,
    backdrop: Color,
) -> Element<'a, Message> {
    if visual == StepVisual::RESTING {
        return content;
    }

    let padding = Padding {
        top: 0.0,
        bottom: 0.0,
        left: visual.offset.max(0.0),
        right: (-visual.offset).max(0.0),
    };
    let shifted = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding);

    let scrim_color = Color {
        a: 1.0 - visual.opacity.clamp(0.0, 1.0),
        ..backdrop
    };
    let scrim = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(scrim_color)),
            ..Default::default()
        });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(shifted)
        .push(scrim)
        .into()
}
