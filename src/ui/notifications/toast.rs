// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts stack in the top-right corner of the window, above
//! the step content. Each card shows a severity strip, the translated
//! message and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Width of the severity strip on the left edge of a toast.
const STRIP_WIDTH: f32 = 4.0;

pub struct Toast;

impl Toast {
    fn message(notification: &Notification, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if args.is_empty() {
            i18n.tr(notification.message_key())
        } else {
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    /// Renders one toast card.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let strip = Container::new(Space::new().width(STRIP_WIDTH).height(sizing::ICON_MD))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let glyph = Text::new(notification.severity().glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(styles::button::ghost);

        let content = Row::new()
            .spacing(spacing::SM)
            .height(Length::Shrink)
            .align_y(alignment::Vertical::Center)
            .push(strip)
            .push(glyph)
            .push(
                Text::new(Self::message(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::SM, spacing::SM])
            .style(card)
            .into()
    }

    /// Renders every visible toast, newest on top.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Shrink)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::MD)
            .into()
    }
}

fn card(theme: &Theme) -> container::Style {
    let surface = if matches!(theme, Theme::Light) {
        palette::WHITE
    } else {
        palette::GRAY_800
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_translucent_panel_surface() {
        match card(&Theme::Dark).background {
            Some(Background::Color(color)) => {
                assert!(color.a < 1.0);
                assert_eq!(color.r, palette::GRAY_800.r);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn message_substitutes_arguments() {
        let i18n = I18n::default();
        let notification =
            Notification::success("notification-save-success").with_arg("path", "/tmp/out.png");
        assert!(Toast::message(&notification, &i18n).contains("/tmp/out.png"));
    }
}
