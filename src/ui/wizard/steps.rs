// SPDX-License-Identifier: MPL-2.0
//! Per-step content.

use super::{Message, ViewContext};
use crate::domain::category::Category;
use crate::domain::image::ImageRecord;
use crate::domain::wizard::{GenerationOutcome, Slot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, text, Button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, ContentFit, Element, Length, Theme,
};

fn title(label: String) -> Text<'static> {
    Text::new(label).size(typography::TITLE_LG)
}

fn muted(label: String) -> Text<'static> {
    Text::new(label)
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        })
}

fn action<'a>(
    label: String,
    message: Message,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG).center())
        .padding([spacing::SM, spacing::LG])
        .style(style)
        .on_press(message)
}

fn back_button(i18n: &I18n) -> Button<'_, Message> {
    action(
        format!("← {}", i18n.tr("nav-back")),
        Message::Back,
        styles::button::ghost,
    )
}

/// Decoded preview of `record`, or nothing when the cache has no handle.
fn preview<'a>(
    ctx: &ViewContext<'a>,
    record: &ImageRecord,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match ctx.previews.get(record.id()) {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
        None => Space::new()
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
    }
}

pub(super) fn start(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title(i18n.tr("start-title")))
        .push(muted(i18n.tr("start-subtitle")).size(typography::BODY_LG))
        .push(action(
            i18n.tr("start-button"),
            Message::GetStarted,
            styles::button::primary,
        ));

    Container::new(content)
        .padding(spacing::XXL)
        .style(styles::container::panel)
        .into()
}

pub(super) fn upload<'a>(ctx: &ViewContext<'a>, slot: Slot) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let (heading, record) = match slot {
        Slot::Person => (i18n.tr("step-person-title"), ctx.wizard.person_image()),
        Slot::Item => {
            let category = ctx
                .wizard
                .category()
                .map(|category| i18n.tr(category.label_key()))
                .unwrap_or_default();
            (
                i18n.tr_with_args("step-item-title", &[("category", category.as_str())]),
                ctx.wizard.item_image(),
            )
        }
    };

    let inner = sizing::UPLOAD_CARD - 2.0 * spacing::MD;
    let slot_content: Element<'a, Message> = match record {
        Some(record) => preview(ctx, record, inner, inner),
        None => muted(i18n.tr("upload-prompt")).into(),
    };
    let dropzone = Container::new(slot_content)
        .width(Length::Fixed(sizing::UPLOAD_CARD))
        .height(Length::Fixed(sizing::UPLOAD_CARD))
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::dropzone);

    let mut buttons = Row::new().spacing(spacing::MD).push(action(
        i18n.tr("upload-file-button"),
        Message::UploadFile(slot),
        styles::button::primary,
    ));
    if ctx.camera_available {
        buttons = buttons.push(action(
            i18n.tr("upload-camera-button"),
            Message::UseCamera(slot),
            styles::button::secondary,
        ));
    }

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title(heading))
        .push(dropzone)
        .push(buttons)
        .push(back_button(i18n))
        .into()
}

pub(super) fn category<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let tiles = Category::ALL.into_iter().fold(
        Row::new().spacing(spacing::LG),
        |row, category| {
            let label = Text::new(i18n.tr(category.label_key()))
                .size(typography::TITLE_SM)
                .width(Length::Fill)
                .height(Length::Fill)
                .center();
            row.push(
                button(label)
                    .width(Length::Fixed(sizing::CATEGORY_TILE))
                    .height(Length::Fixed(sizing::CATEGORY_TILE))
                    .style(styles::button::category_tile)
                    .on_press(Message::ChooseCategory(category)),
            )
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title(i18n.tr("step-category-title")))
        .push(tiles)
        .push(back_button(i18n))
        .into()
}

pub(super) fn result<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let thumb = sizing::CATEGORY_TILE;

    let inputs = [ctx.wizard.person_image(), ctx.wizard.item_image()]
        .into_iter()
        .flatten()
        .fold(Column::new().spacing(spacing::MD), |column, record| {
            column.push(
                Container::new(preview(ctx, record, thumb, thumb))
                    .padding(spacing::XS)
                    .style(styles::container::dropzone),
            )
        });

    let panel = Container::new(outcome(ctx))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::RESULT_MIN_HEIGHT))
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::panel);

    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(action(
            i18n.tr("result-try-another-button"),
            Message::TryAnotherItem,
            styles::button::secondary,
        ))
        .push(action(
            i18n.tr("result-start-over-button"),
            Message::StartOver,
            styles::button::secondary,
        ));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .align_y(Vertical::Center)
                .push(inputs)
                .push(panel),
        )
        .push(buttons)
        .push(back_button(i18n));

    Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
}

fn outcome<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match ctx.wizard.outcome() {
        GenerationOutcome::Pending => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, ctx.waiting_for).into_element())
            .push(Text::new(i18n.tr("result-loading-title")).size(typography::TITLE_SM))
            .push(muted(i18n.tr("result-loading-subtitle")))
            .into(),
        GenerationOutcome::Failed(failure) => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("result-error-title"))
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            )
            .push(Text::new(i18n.tr(failure.message_key())).size(typography::BODY))
            .into(),
        GenerationOutcome::Succeeded(record) => {
            let height = sizing::RESULT_MIN_HEIGHT - 2.0 * spacing::LG - 3.0 * spacing::XL;
            let image: Element<'a, Message> = match ctx.previews.get(record.id()) {
                Some(handle) => image::Image::new(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(height))
                    .into(),
                None => Space::new().height(Length::Fixed(height)).into(),
            };
            Column::new()
                .spacing(spacing::MD)
                .align_x(Horizontal::Center)
                .push(
                    Container::new(image).style(|_theme: &Theme| {
                        iced::widget::container::Style {
                            border: Border {
                                radius: radius::MD.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }
                    }),
                )
                .push(action(
                    i18n.tr("result-download-button"),
                    Message::Download,
                    styles::button::primary,
                ))
                .into()
        }
        GenerationOutcome::NotStarted => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("result-placeholder-title")).size(typography::TITLE_SM))
            .push(muted(i18n.tr("result-placeholder-subtitle")))
            .into(),
    }
}
