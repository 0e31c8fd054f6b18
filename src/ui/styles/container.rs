// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn card_surface(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::WHITE
    } else {
        palette::GRAY_800
    }
}

/// Whole-window backdrop: black in dark mode.
pub fn backdrop(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::BLACK
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Rounded card holding one step's content.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_surface(theme))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Empty upload slot waiting for a photo.
pub fn dropzone(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_surface(theme))),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Full-window scrim behind the camera preview.
pub fn camera_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
