// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and exit grace interval
//! - **Scheduling**: Tick interval driving the lifecycle deadlines
//! - **History**: Lifecycle event history bounds

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before auto-dismiss begins (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Delay between the start of the exit animation and actual removal (in milliseconds).
///
/// Fixed on purpose: animation timing is not configurable.
pub const EXIT_GRACE_MS: u64 = 300;

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Interval of the tick subscription while toasts are on screen (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of lifecycle events kept in the history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 1;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 1024;

const _: () = {
    assert!(EXIT_GRACE_MS > TICK_INTERVAL_MS);
    assert!(MIN_HISTORY_CAPACITY <= DEFAULT_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
};
