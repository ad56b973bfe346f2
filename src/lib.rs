// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides transient, auto-dismissing toast notifications for
//! applications built with the Iced GUI framework.
//!
//! Toasts stack at one of six screen anchors and leave after their duration
//! elapses or when the user closes them. A short fade plays before removal.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::{Config, ToastOptions, ToastProvider};
//!
//! // Keep the provider in your application state
//! let mut toasts = ToastProvider::new(Config::default());
//!
//! // Raise a toast from `update`
//! toasts.notifier()?.success("Image saved", ToastOptions::default());
//!
//! // Forward messages and ticks
//! fn subscription(&self) -> Subscription<Message> {
//!     self.toasts.subscription().map(Message::Toast)
//! }
//!
//! // Wrap the view so toasts are drawn above it
//! fn view(&self) -> Element<'_, Message> {
//!     self.toasts.view(content, Message::Toast)
//! }
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod notifier;
pub mod position;
pub mod provider;
pub mod registry;
pub mod toast;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
pub use history::{EventKind, History, ToastEvent};
pub use lifecycle::{Controller, Phase, Step, Trigger};
pub use notifier::{use_notify, Notifier};
pub use position::Position;
pub use provider::{Message, ToastProvider, Toaster};
pub use registry::Registry;
pub use toast::{create_toast, Kind, Toast, ToastId, ToastOptions};
