// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering every position group at its anchor.

use super::design_tokens::spacing;
use super::toast;
use crate::position::Position;
use crate::provider::{Message, Toaster};
use crate::toast::Toast;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Renders one container per non-empty position group, stacked on top of
/// each other so every group sits in its own corner or edge.
pub fn view(toaster: &Toaster) -> Element<'_, Message> {
    let groups: Vec<Element<'_, Message>> = toaster
        .grouped()
        .into_iter()
        .map(|(position, toasts)| group(toaster, position, toasts))
        .collect();

    Stack::with_children(groups)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn group<'a>(
    toaster: &'a Toaster,
    position: Position,
    toasts: Vec<&'a Toast>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = toasts
        .into_iter()
        .map(|t| toast::view(t, toaster.opacity(t.id())))
        .collect();

    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(position.horizontal());

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(position.horizontal())
        .align_y(position.vertical())
        .padding(spacing::MD)
        .into()
}
