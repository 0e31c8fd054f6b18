// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Get Started", "Upload File", "Download").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active => palette::PRIMARY_600,
        button::Status::Disabled => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Secondary action ("Use Camera", "Try Another Item", "Start Over").
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let background = match status {
        button::Status::Hovered if is_light => palette::GRAY_200,
        button::Status::Hovered => Color::from_rgb(0.35, 0.35, 0.35),
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..bg_color
        },
        button::Status::Active | button::Status::Pressed => bg_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: if matches!(status, button::Status::Hovered) {
                palette::PRIMARY_500
            } else {
                palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only control used for "Back".
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..text
        },
        button::Status::Active => text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Category picker tile: a card that lifts and gains a brand border on hover.
pub fn category_tile(theme: &Theme, status: button::Status) -> button::Style {
    let surface = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_800
    };
    let hovered = matches!(
        status,
        button::Status::Hovered | button::Status::Pressed
    );

    button::Style {
        background: Some(Background::Color(surface)),
        text_color: theme.palette().text,
        border: Border {
            color: if hovered {
                palette::PRIMARY_500
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: if hovered { shadow::LG } else { shadow::SM },
        snap: true,
    }
}

/// Round white shutter of the camera overlay.
pub fn shutter(_theme: &Theme, status: button::Status) -> button::Style {
    let ring = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(WHITE)),
        text_color: palette::GRAY_900,
        border: Border {
            color: ring,
            width: border::WIDTH_MD * 2.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}
