// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering an individual toast.
//!
//! A toast is a small card with a kind-colored accent border, a glyph, the
//! message and a close button. Exiting toasts are rendered with reduced
//! opacity so the card fades out before it is removed.

use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::provider::Message;
use crate::toast::{Kind, Toast};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast at the given opacity (1.0 is fully visible).
pub fn view(toast: &Toast, alpha: f32) -> Element<'_, Message> {
    let alpha = alpha.clamp(0.0, 1.0);
    let accent = fade(accent_color(toast.kind()), alpha);

    let icon = Text::new(glyph(toast.kind()))
        .size(sizing::GLYPH)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.palette().text, alpha)),
        });

    let close = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Close(toast.id().clone()))
        .padding([0.0, spacing::XXS])
        .style(move |theme: &Theme, status: button::Status| {
            close_button_style(theme, status, alpha)
        });

    // Layout: [icon] [message] [close]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

/// Glyph shown at the start of a toast.
#[must_use]
pub fn glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Warning => "⚠",
        Kind::Info => "ℹ",
    }
}

/// Accent color of the toast border and glyph.
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(palette::BLACK, opacity::SHADOW * alpha),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = fade(theme.extended_palette().background.base.text, alpha);
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
