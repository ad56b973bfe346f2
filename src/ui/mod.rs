// SPDX-License-Identifier: MPL-2.0
//! Default presentation of toasts with Iced widgets.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - A single toast card
//! - [`overlay`] - Position groups laid out at their anchors

pub mod design_tokens;
pub mod overlay;
pub mod toast;
