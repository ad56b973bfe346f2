// SPDX-License-Identifier: MPL-2.0
//! Notification API used by application code to raise toasts.
//!
//! # Usage
//!
//! ```
//! use iced_toasts::{Config, ToastOptions, ToastProvider, Position};
//!
//! let mut provider = ToastProvider::new(Config::default());
//!
//! let mut notify = provider.notifier().expect("provider is mounted");
//! notify.success("Image saved", ToastOptions::default());
//! notify.error(
//!     "Could not reach the server",
//!     ToastOptions::new().duration_ms(8000).position(Position::BottomCenter),
//! );
//! ```

use crate::error::{Error, Result};
use crate::provider::Toaster;
use crate::toast::{Kind, ToastId, ToastOptions};

/// Returns the notification API for a mounted toaster.
///
/// Fails with [`Error::ProviderNotMounted`] when `toaster` is `None`, so
/// missing setup surfaces at the call site instead of silently dropping toasts.
pub fn use_notify(toaster: Option<&mut Toaster>) -> Result<Notifier<'_>> {
    toaster.map(Notifier::new).ok_or(Error::ProviderNotMounted)
}

/// Raises toasts on a mounted [`Toaster`].
#[derive(Debug)]
pub struct Notifier<'a> {
    toaster: &'a mut Toaster,
}

impl<'a> Notifier<'a> {
    pub(crate) fn new(toaster: &'a mut Toaster) -> Self {
        Self { toaster }
    }

    /// Shows a toast. Unset options take the configured defaults, then the
    /// factory defaults.
    pub fn notify(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.toaster.show(message.into(), options)
    }

    /// Shows a success toast. Any kind set in `options` is overridden.
    pub fn success(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.notify_as(Kind::Success, message, options)
    }

    /// Shows an error toast. Any kind set in `options` is overridden.
    pub fn error(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.notify_as(Kind::Error, message, options)
    }

    /// Shows a warning toast. Any kind set in `options` is overridden.
    pub fn warning(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.notify_as(Kind::Warning, message, options)
    }

    /// Shows an info toast. Any kind set in `options` is overridden.
    pub fn info(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.notify_as(Kind::Info, message, options)
    }

    fn notify_as(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.notify(message, options.kind(kind))
    }
}
