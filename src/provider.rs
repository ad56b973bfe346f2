// SPDX-License-Identifier: MPL-2.0
//! Toast state ownership and its scoping to a UI subtree.
//!
//! [`Toaster`] is the mounted state: the registry, one lifecycle controller
//! per toast, the configured defaults and the event history.
//! [`ToastProvider`] is what an application keeps in its own state. It
//! mounts and unmounts a toaster, routes messages and ticks to it, and
//! stacks the toast overlay over the content it wraps.

use crate::config::{Config, TICK_INTERVAL_MS};
use crate::error::Result;
use crate::history::{EventKind, History};
use crate::lifecycle::{Controller, Phase, Step, Trigger};
use crate::notifier::{use_notify, Notifier};
use crate::position::Position;
use crate::registry::Registry;
use crate::toast::{create_toast, Toast, ToastId, ToastOptions};
use crate::ui;
use iced::widget::Stack;
use iced::{time, Element, Length, Subscription};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed the close button of a toast.
    Close(ToastId),
    /// Tick driving the lifecycle deadlines.
    Tick(Instant),
}

/// Mounted toast state.
#[derive(Debug)]
pub struct Toaster {
    registry: Registry,
    controllers: HashMap<ToastId, Controller>,
    defaults: ToastOptions,
    history: History,
    /// Time of the last tick, used to render exit fades.
    now: Option<Instant>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Toaster {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            registry: Registry::new(),
            controllers: HashMap::new(),
            defaults: config.toast_defaults(),
            history: History::new(config.history_capacity()),
            now: None,
        }
    }

    /// Returns the notification API bound to this toaster.
    pub fn notifier(&mut self) -> Notifier<'_> {
        Notifier::new(self)
    }

    /// Creates a toast and starts its lifecycle.
    pub(crate) fn show(&mut self, message: String, options: ToastOptions) -> ToastId {
        let toast = create_toast(message, options.or(self.defaults));
        let id = toast.id().clone();

        tracing::debug!(
            id = %id,
            kind = %toast.kind(),
            position = %toast.position(),
            duration_ms = u64::try_from(toast.duration().as_millis()).unwrap_or(u64::MAX),
            "toast shown"
        );
        self.history.record(
            &id,
            EventKind::Shown {
                kind: toast.kind(),
                position: toast.position(),
            },
        );

        self.controllers.insert(id.clone(), Controller::new(&toast));
        self.registry.add(toast);
        id
    }

    /// Starts the exit of a toast on behalf of the user.
    ///
    /// Returns `false` for unknown ids and for toasts that are already exiting.
    pub fn close(&mut self, id: &ToastId) -> bool {
        let Some(controller) = self.controllers.get_mut(id) else {
            tracing::trace!(id = %id, "close ignored for unknown toast");
            return false;
        };
        if !controller.dismiss(Trigger::Manual) {
            tracing::trace!(id = %id, "close ignored, toast already exiting");
            return false;
        }
        tracing::debug!(id = %id, trigger = ?Trigger::Manual, "toast dismissed");
        self.history.record(id, EventKind::Dismissed(Trigger::Manual));
        true
    }

    /// Advances every lifecycle to `now`, returning the ids removed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        self.now = Some(now);

        // Registry order keeps removals and history deterministic
        let ids: Vec<ToastId> = self.registry.iter().map(|t| t.id().clone()).collect();
        let mut removed = Vec::new();
        for id in &ids {
            let Some(controller) = self.controllers.get_mut(id) else {
                continue;
            };
            match controller.advance(now) {
                Some(Step::Expired) => {
                    tracing::debug!(id = %id, trigger = ?Trigger::Timeout, "toast dismissed");
                    self.history
                        .record(id, EventKind::Dismissed(Trigger::Timeout));
                }
                Some(Step::Removed(id)) => removed.push(id),
                None => {}
            }
        }

        for id in &removed {
            self.controllers.remove(id);
            if self.registry.remove(id).is_some() {
                tracing::debug!(id = %id, "toast removed");
                self.history.record(id, EventKind::Removed);
            }
        }
        removed
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close(id) => {
                self.close(&id);
            }
            Message::Tick(now) => {
                self.tick(now);
            }
        }
    }

    /// Drops every toast together with its pending deadlines.
    pub fn clear(&mut self) -> usize {
        let cancelled = self.registry.clear().len();
        self.controllers.clear();
        cancelled
    }

    /// Returns the active toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.registry.iter()
    }

    #[must_use]
    pub fn grouped(&self) -> BTreeMap<Position, Vec<&Toast>> {
        self.registry.group_by_position()
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Lifecycle phase of a toast still in the registry.
    #[must_use]
    pub fn phase(&self, id: &ToastId) -> Option<Phase> {
        self.controllers.get(id).map(Controller::phase)
    }

    /// Render opacity of a toast as of the last tick.
    #[must_use]
    pub fn opacity(&self, id: &ToastId) -> f32 {
        match (self.controllers.get(id), self.now) {
            (Some(controller), Some(now)) => controller.opacity(now),
            (Some(_), None) => 1.0,
            (None, _) => 0.0,
        }
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Tick subscription, active only while toasts are on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

/// Scopes a [`Toaster`] to the UI subtree it wraps.
///
/// While unmounted, [`ToastProvider::notifier`] fails with
/// [`Error::ProviderNotMounted`](crate::Error::ProviderNotMounted) and late
/// messages are ignored.
#[derive(Debug, Default)]
pub struct ToastProvider {
    config: Config,
    toaster: Option<Toaster>,
}

impl ToastProvider {
    /// Creates a provider that is already mounted.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut provider = Self::unmounted(config);
        provider.mount();
        provider
    }

    /// Creates a provider with nothing mounted yet.
    #[must_use]
    pub fn unmounted(config: Config) -> Self {
        Self {
            config,
            toaster: None,
        }
    }

    /// Mounts a fresh toaster. Does nothing if one is already mounted.
    pub fn mount(&mut self) {
        if self.toaster.is_none() {
            tracing::debug!("toast provider mounted");
            self.toaster = Some(Toaster::new(&self.config));
        }
    }

    /// Tears the toaster down, cancelling every pending deadline.
    pub fn unmount(&mut self) {
        if let Some(mut toaster) = self.toaster.take() {
            let cancelled = toaster.clear();
            tracing::debug!(cancelled, "toast provider unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.toaster.is_some()
    }

    #[must_use]
    pub fn toaster(&self) -> Option<&Toaster> {
        self.toaster.as_ref()
    }

    /// Returns the notification API, or an error when nothing is mounted.
    pub fn notifier(&mut self) -> Result<Notifier<'_>> {
        use_notify(self.toaster.as_mut())
    }

    pub fn update(&mut self, message: Message) {
        match self.toaster.as_mut() {
            Some(toaster) => toaster.update(message),
            None => tracing::trace!(?message, "toast message ignored, provider unmounted"),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.toaster
            .as_ref()
            .map_or_else(Subscription::none, Toaster::subscription)
    }

    /// Stacks the grouped toast containers over `content`.
    ///
    /// The root is always a [`Stack`] with `content` first, so the widget
    /// state of the wrapped subtree survives toasts appearing and leaving.
    pub fn view<'a, M: 'a>(
        &'a self,
        content: impl Into<Element<'a, M>>,
        on_message: fn(Message) -> M,
    ) -> Element<'a, M> {
        let overlay: Element<'a, M> = match &self.toaster {
            Some(toaster) => ui::overlay::view(toaster).map(on_message),
            None => Stack::new().into(),
        };

        Stack::new()
            .push(content)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::lifecycle::EXIT_GRACE;
    use crate::toast::Kind;
    use iced::advanced::subscription::into_recipes;
    use iced::advanced::widget::tree::Tag;
    use iced::advanced::widget::Tree;
    use iced::widget::text_input;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recipes(provider: &ToastProvider) -> usize {
        into_recipes(provider.subscription()).len()
    }

    fn removed_count(toaster: &Toaster, id: &ToastId) -> usize {
        toaster
            .history()
            .for_toast(id)
            .filter(|e| e.kind == EventKind::Removed)
            .count()
    }

    #[test]
    fn show_registers_toast_and_controller() {
        let mut toaster = Toaster::default();
        let id = toaster.show("saved".into(), ToastOptions::new().kind(Kind::Success));

        assert!(toaster.registry().contains(&id));
        assert_eq!(toaster.phase(&id), Some(Phase::Active));
        assert!(toaster.has_toasts());
    }

    #[test]
    fn oversized_duration_is_shown_and_ticked_without_overflow() {
        let mut toaster = Toaster::default();
        let id = toaster.show("pinned".into(), ToastOptions::new().duration(Duration::MAX));

        let start = Instant::now();
        assert!(toaster.tick(start).is_empty());
        assert!(toaster.tick(start + ms(3_600_000)).is_empty());
        assert_eq!(toaster.phase(&id), Some(Phase::Active));
    }

    #[test]
    fn configured_defaults_fill_missing_options() {
        let config = Config {
            default_duration_ms: Some(1234),
            default_position: Some(Position::BottomCenter),
            history_capacity: None,
        };
        let mut toaster = Toaster::new(&config);
        let id = toaster.show("x".into(), ToastOptions::default());

        let toast = toaster.registry().get(&id).expect("toast registered");
        assert_eq!(toast.duration(), ms(1234));
        assert_eq!(toast.position(), Position::BottomCenter);
        assert_eq!(toast.kind(), Kind::Info);
    }

    #[test]
    fn tick_removes_expired_toast_exactly_once() {
        let mut toaster = Toaster::default();
        let id = toaster.show("x".into(), ToastOptions::new().duration_ms(100));
        let start = Instant::now();

        let mut removals = Vec::new();
        for t in (0..=1_000).step_by(50) {
            removals.extend(toaster.tick(start + ms(t)));
            if t == 100 {
                assert_eq!(toaster.phase(&id), Some(Phase::Exiting));
            }
        }

        assert_eq!(removals, vec![id.clone()]);
        assert!(!toaster.has_toasts());
        assert_eq!(toaster.phase(&id), None);
        assert_eq!(removed_count(&toaster, &id), 1);
    }

    #[test]
    fn manual_close_and_late_timeout_remove_once() {
        let mut toaster = Toaster::default();
        let id = toaster.show("x".into(), ToastOptions::new().duration_ms(100));
        let start = Instant::now();
        toaster.tick(start);

        assert!(toaster.close(&id));
        assert!(!toaster.close(&id));

        let mut removals = Vec::new();
        for t in (50..=1_000).step_by(50) {
            removals.extend(toaster.tick(start + ms(t)));
        }

        assert_eq!(removals.len(), 1);
        let dismissals: Vec<EventKind> = toaster
            .history()
            .for_toast(&id)
            .map(|e| e.kind)
            .filter(|k| matches!(k, EventKind::Dismissed(_)))
            .collect();
        assert_eq!(dismissals, vec![EventKind::Dismissed(Trigger::Manual)]);
        assert_eq!(removed_count(&toaster, &id), 1);
    }

    #[test]
    fn close_unknown_id_is_ignored() {
        let mut toaster = Toaster::default();
        toaster.show("x".into(), ToastOptions::default());
        assert!(!toaster.close(&ToastId::new()));
        assert_eq!(toaster.registry().len(), 1);
    }

    #[test]
    fn opacity_follows_last_tick() {
        let mut toaster = Toaster::default();
        let id = toaster.show("x".into(), ToastOptions::default());
        assert!((toaster.opacity(&id) - 1.0).abs() < f32::EPSILON);

        let start = Instant::now();
        toaster.tick(start);
        toaster.close(&id);
        toaster.tick(start + ms(10));
        toaster.tick(start + ms(10) + EXIT_GRACE / 2);
        assert!((toaster.opacity(&id) - 0.5).abs() < 0.01);
    }

    #[test]
    fn unmounted_provider_rejects_notifications() {
        let mut provider = ToastProvider::unmounted(Config::default());
        assert_eq!(provider.notifier().err(), Some(Error::ProviderNotMounted));
    }

    #[test]
    fn unmount_cancels_pending_toasts_and_ignores_late_messages() {
        let mut provider = ToastProvider::new(Config::default());
        let id = provider
            .notifier()
            .expect("provider is mounted")
            .info("bye", ToastOptions::default());
        assert_eq!(recipes(&provider), 1);

        provider.unmount();
        assert!(!provider.is_mounted());
        assert_eq!(recipes(&provider), 0);

        provider.update(Message::Close(id.clone()));
        provider.update(Message::Tick(Instant::now() + ms(10_000)));
        assert!(provider.toaster().is_none());

        provider.mount();
        let toaster = provider.toaster().expect("mounted again");
        assert_eq!(toaster.phase(&id), None);
        assert!(toaster.opacity(&id).abs() < f32::EPSILON);
        assert!(!toaster.has_toasts());
        assert_eq!(recipes(&provider), 0);
    }

    #[test]
    fn tick_processes_simultaneous_expiries_in_insertion_order() {
        let mut toaster = Toaster::default();
        let ids: Vec<ToastId> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|m| toaster.show(m.into(), ToastOptions::new().duration_ms(100)))
            .collect();
        let start = Instant::now();

        toaster.tick(start);
        toaster.tick(start + ms(100));
        let removed = toaster.tick(start + ms(100) + EXIT_GRACE);
        assert_eq!(removed, ids);

        let dismissed: Vec<&ToastId> = toaster
            .history()
            .iter()
            .filter(|e| e.kind == EventKind::Dismissed(Trigger::Timeout))
            .map(|e| &e.id)
            .collect();
        assert_eq!(dismissed, ids.iter().collect::<Vec<_>>());

        let removals: Vec<&ToastId> = toaster
            .history()
            .iter()
            .filter(|e| e.kind == EventKind::Removed)
            .map(|e| &e.id)
            .collect();
        assert_eq!(removals, ids.iter().collect::<Vec<_>>());
    }

    #[test]
    fn view_root_keeps_its_widget_tag_as_toasts_come_and_go() {
        fn tags(provider: &ToastProvider) -> (Tag, Tag) {
            let element: Element<'_, ()> = provider.view(text_input("", ""), |_| ());
            let tree = Tree::new(&element);
            (tree.tag, tree.children[0].tag)
        }

        let mut provider = ToastProvider::new(Config::default());
        let empty = tags(&provider);

        let id = provider
            .notifier()
            .expect("provider is mounted")
            .info("hi", ToastOptions::new().duration_ms(100));
        assert_eq!(tags(&provider), empty);

        let start = Instant::now();
        provider.update(Message::Tick(start));
        provider.update(Message::Tick(start + ms(100)));
        provider.update(Message::Tick(start + ms(100) + EXIT_GRACE));
        assert_eq!(provider.toaster().and_then(|t| t.phase(&id)), None);
        assert_eq!(tags(&provider), empty);

        provider.unmount();
        assert_eq!(tags(&provider), empty);
    }

    #[test]
    fn remount_starts_from_empty_state() {
        let mut provider = ToastProvider::new(Config::default());
        provider
            .notifier()
            .expect("provider is mounted")
            .warning("first", ToastOptions::default());

        provider.unmount();
        provider.mount();

        let toaster = provider.toaster().expect("mounted again");
        assert!(!toaster.has_toasts());
        assert!(toaster.history().is_empty());
    }

    #[test]
    fn independent_providers_do_not_share_state() {
        let mut a = ToastProvider::new(Config::default());
        let b = ToastProvider::new(Config::default());

        a.notifier()
            .expect("provider is mounted")
            .error("only in a", ToastOptions::default());

        assert_eq!(a.toaster().map(|t| t.registry().len()), Some(1));
        assert_eq!(b.toaster().map(|t| t.registry().len()), Some(0));
    }
}
