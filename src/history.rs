// SPDX-License-Identifier: MPL-2.0
//! Bounded history of toast lifecycle events.
//!
//! Every toast that is shown, dismissed or removed leaves an entry here so
//! applications can inspect recent notification activity. The storage is a
//! ring buffer that evicts the oldest entries when capacity is reached.

use crate::config::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};
use crate::lifecycle::Trigger;
use crate::position::Position;
use crate::toast::{Kind, ToastId};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// What happened to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Shown { kind: Kind, position: Position },
    Dismissed(Trigger),
    Removed,
}

/// A single lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEvent {
    pub id: ToastId,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

/// Recent lifecycle events, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    events: CircularBuffer<ToastEvent>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates a history, clamping `capacity` to the supported range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::with_capacity(
                capacity.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY),
            ),
        }
    }

    pub fn record(&mut self, id: &ToastId, kind: EventKind) {
        self.events.push(ToastEvent {
            id: id.clone(),
            kind,
            at: Utc::now(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.events.iter()
    }

    /// Events recorded for one toast, oldest first.
    pub fn for_toast<'a>(&'a self, id: &'a ToastId) -> impl Iterator<Item = &'a ToastEvent> {
        self.events.iter().filter(move |event| &event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_capacity(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn circular_buffer_has_at_least_one_slot() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_capacity(0);
        buffer.push(7);
        buffer.push(8);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_capacity(5);
        buffer.push(1);
        buffer.push(2);

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn history_capacity_is_clamped() {
        assert_eq!(History::new(0).capacity(), MIN_HISTORY_CAPACITY);
        assert_eq!(History::new(usize::MAX).capacity(), MAX_HISTORY_CAPACITY);
        assert_eq!(History::default().capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn for_toast_filters_by_id() {
        let mut history = History::default();
        let a = ToastId::new();
        let b = ToastId::new();

        history.record(
            &a,
            EventKind::Shown {
                kind: Kind::Info,
                position: Position::TopRight,
            },
        );
        history.record(&b, EventKind::Removed);
        history.record(&a, EventKind::Dismissed(Trigger::Manual));

        let kinds: Vec<EventKind> = history.for_toast(&a).map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Shown {
                    kind: Kind::Info,
                    position: Position::TopRight
                },
                EventKind::Dismissed(Trigger::Manual),
            ]
        );
        assert_eq!(history.len(), 3);
    }
}
