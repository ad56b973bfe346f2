// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the immutable [`Toast`] record, its [`Kind`], the
//! caller-facing [`ToastOptions`] and the [`create_toast`] factory that fills
//! in defaults and generates identities.

use crate::config::DEFAULT_DURATION_MS;
use crate::error::{Error, Result};
use crate::position::Position;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Auto-dismiss delay used when neither the caller nor the config sets one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_DURATION_MS);

/// Unique identifier for a toast.
///
/// Formatted as `toast-<unix millis>-<sequence>`. The sequence comes from a
/// process-wide counter, so identifiers are never reused within a process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new unique toast ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("toast-{millis}-{}", base36(sequence)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Kind of toast, which selects its glyph and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidKind(s.to_string()))
    }
}

/// Optional settings for a new toast. Unset fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastOptions {
    pub kind: Option<Kind>,
    pub duration: Option<Duration>,
    pub position: Option<Position>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for [`ToastOptions::duration`] in milliseconds.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Fills every unset field from `fallback`.
    #[must_use]
    pub fn or(self, fallback: ToastOptions) -> Self {
        Self {
            kind: self.kind.or(fallback.kind),
            duration: self.duration.or(fallback.duration),
            position: self.position.or(fallback.position),
        }
    }
}

/// A toast as held by the registry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: Kind,
    duration: Duration,
    position: Position,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Time the toast stays active before auto-dismiss begins.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Builds a toast with a fresh id, falling back to the factory defaults
/// (info, 3 seconds, top-right) for anything `options` leaves unset.
pub fn create_toast(message: impl Into<String>, options: ToastOptions) -> Toast {
    Toast {
        id: ToastId::new(),
        message: message.into(),
        kind: options.kind.unwrap_or_default(),
        duration: options.duration.unwrap_or(DEFAULT_DURATION),
        position: options.position.unwrap_or_default(),
    }
}
