// SPDX-License-Identifier: MPL-2.0
//! Screen anchors where groups of toasts stack.

use crate::error::{Error, Result};
use iced::alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six screen anchors a toast can be stacked at.
///
/// The ordering follows [`Position::ALL`] and is the order in which groups
/// are yielded by [`Registry::group_by_position`](crate::Registry::group_by_position).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl Position {
    /// Every anchor, in display order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Horizontal alignment of the anchor inside the window.
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    /// Vertical alignment of the anchor inside the window.
    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        if self.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}
