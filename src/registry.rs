// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of the active toasts.
//!
//! The registry only stores records. Timing lives in
//! [`lifecycle`](crate::lifecycle) and rendering in [`ui`](crate::ui).

use crate::position::Position;
use crate::toast::{Toast, ToastId};
use std::collections::BTreeMap;

/// Active toasts in insertion order.
///
/// Every effective mutation bumps [`Registry::revision`], which observers can
/// compare against a stored value to detect changes.
#[derive(Debug, Default)]
pub struct Registry {
    toasts: Vec<Toast>,
    revision: u64,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast at the end of the sequence.
    pub fn add(&mut self, toast: Toast) {
        debug_assert!(
            !self.contains(toast.id()),
            "toast ids are unique by construction"
        );
        self.toasts.push(toast);
        self.bump();
    }

    /// Removes the toast with the given id.
    ///
    /// Unknown ids are a no-op: `None` is returned and the revision is unchanged.
    pub fn remove(&mut self, id: &ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id() == id)?;
        let removed = self.toasts.remove(pos);
        self.bump();
        Some(removed)
    }

    /// Groups the toasts by position, keeping insertion order inside each group.
    ///
    /// Positions without toasts have no entry.
    #[must_use]
    pub fn group_by_position(&self) -> BTreeMap<Position, Vec<&Toast>> {
        let mut groups: BTreeMap<Position, Vec<&Toast>> = BTreeMap::new();
        for toast in &self.toasts {
            groups.entry(toast.position()).or_default().push(toast);
        }
        groups
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Monotonic counter of state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes every toast, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<Toast> {
        if self.toasts.is_empty() {
            return Vec::new();
        }
        self.bump();
        std::mem::take(&mut self.toasts)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
