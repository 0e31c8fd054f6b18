// SPDX-License-Identifier: MPL-2.0
//! Camera capture overlay.

use super::{CameraView, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Preview with a cancel control and the shutter.
///
/// The shutter stays disabled until the first frame is shown.
pub(super) fn overlay<'a>(i18n: &'a I18n, camera: CameraView<'a>) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match camera.frame {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(i18n.tr("camera-starting"))
            .size(typography::BODY_LG)
            .into(),
    };

    let shutter = button(Space::new())
        .width(Length::Fixed(sizing::SHUTTER))
        .height(Length::Fixed(sizing::SHUTTER))
        .style(styles::button::shutter)
        .on_press_maybe(camera.frame.map(|_| Message::TakePhoto));

    let cancel = button(Text::new(i18n.tr("camera-cancel-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::secondary)
        .on_press(Message::CancelCamera);

    let controls = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(cancel)
        .push(shutter)
        .push(Text::new(i18n.tr("camera-capture-button")).size(typography::BODY));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(
            Container::new(preview)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(controls);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::camera_overlay)
        .into()
}
