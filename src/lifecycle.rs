// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle: Active → Exiting → Removed.
//!
//! Deadlines are stored inside the state they belong to. Leaving a state
//! drops its deadline, and dropping a [`Controller`] drops whatever was
//! still pending, so a timer can never fire against a stale toast.
//!
//! Deadlines are armed on the first [`Controller::advance`] call after the
//! state is entered, which is the first tick after the toast is rendered.

use crate::config::EXIT_GRACE_MS;
use crate::toast::{Toast, ToastId};
use std::time::{Duration, Instant};

/// Delay between entering [`Phase::Exiting`] and removal, leaving room for
/// the exit animation.
pub const EXIT_GRACE: Duration = Duration::from_millis(EXIT_GRACE_MS);

/// What started the exit of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The auto-dismiss deadline elapsed.
    Timeout,
    /// The user pressed the close button.
    Manual,
}

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Exiting,
    Removed,
}

/// Transition reported by [`Controller::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The auto-dismiss deadline elapsed and the exit animation started.
    Expired,
    /// The exit grace elapsed. The toast must now leave the registry.
    Removed(ToastId),
}

#[derive(Debug)]
enum State {
    Active { dismiss_at: Option<Instant> },
    Exiting {
        trigger: Trigger,
        remove_at: Option<Instant>,
    },
    Removed,
}

/// Drives a single toast through its lifecycle.
#[derive(Debug)]
pub struct Controller {
    id: ToastId,
    duration: Duration,
    state: State,
}

impl Controller {
    #[must_use]
    pub fn new(toast: &Toast) -> Self {
        Self {
            id: toast.id().clone(),
            duration: toast.duration(),
            state: State::Active { dismiss_at: None },
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Active { .. } => Phase::Active,
            State::Exiting { .. } => Phase::Exiting,
            State::Removed => Phase::Removed,
        }
    }

    /// What started the exit, once the toast has left [`Phase::Active`].
    #[must_use]
    pub fn trigger(&self) -> Option<Trigger> {
        match self.state {
            State::Exiting { trigger, .. } => Some(trigger),
            _ => None,
        }
    }

    /// Starts the exit. Only the first call while active has an effect.
    ///
    /// Returns `false` when the toast was already exiting or removed.
    pub fn dismiss(&mut self, trigger: Trigger) -> bool {
        match self.state {
            State::Active { .. } => {
                self.state = State::Exiting {
                    trigger,
                    remove_at: None,
                };
                true
            }
            State::Exiting { .. } | State::Removed => false,
        }
    }

    /// Arms pending deadlines and fires the ones that are due at `now`.
    ///
    /// [`Step::Removed`] is returned at most once over the controller's life.
    pub fn advance(&mut self, now: Instant) -> Option<Step> {
        match self.state {
            State::Active { dismiss_at: None } => {
                // An unrepresentable deadline never fires
                let deadline = now.checked_add(self.duration)?;
                self.state = State::Active {
                    dismiss_at: Some(deadline),
                };
                // A zero duration is already due.
                self.fire_dismiss(now)
            }
            State::Active { dismiss_at: Some(_) } => self.fire_dismiss(now),
            State::Exiting {
                trigger,
                remove_at: None,
            } => {
                self.state = State::Exiting {
                    trigger,
                    remove_at: Some(now + EXIT_GRACE),
                };
                None
            }
            State::Exiting {
                remove_at: Some(deadline),
                ..
            } if now >= deadline => {
                self.state = State::Removed;
                Some(Step::Removed(self.id.clone()))
            }
            State::Exiting { .. } | State::Removed => None,
        }
    }

    /// Render opacity: opaque while active, fading out across the exit grace.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.state {
            State::Active { .. }
            | State::Exiting {
                remove_at: None, ..
            } => 1.0,
            State::Exiting {
                remove_at: Some(deadline),
                ..
            } => {
                let remaining = deadline.saturating_duration_since(now);
                (remaining.as_secs_f32() / EXIT_GRACE.as_secs_f32()).clamp(0.0, 1.0)
            }
            State::Removed => 0.0,
        }
    }

    fn fire_dismiss(&mut self, now: Instant) -> Option<Step> {
        match self.state {
            State::Active {
                dismiss_at: Some(deadline),
            } if now >= deadline => {
                self.state = State::Exiting {
                    trigger: Trigger::Timeout,
                    remove_at: Some(now + EXIT_GRACE),
                };
                Some(Step::Expired)
            }
            _ => None,
        }
    }
}
