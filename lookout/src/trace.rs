// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for ticks.
//!
//! The trackers report what changed as return values; the composition root
//! forwards them, together with configuration it had to reject, to a
//! [`LookoutTrace`] sink supplied by the caller. Nothing is stored unless the
//! sink stores it.
//!
//! - `()` discards everything.
//! - [`EventRecorder`] keeps events in arrival order, which is what tests and
//!   inspectors usually want.
//! - `TracingTrace` (with the `tracing` feature) forwards to the `tracing` crate.

use alloc::vec::Vec;

use lookout_geometry::ViewportSnapshot;
use lookout_reveal::RevealEvent;
use lookout_spy::SpyChange;
use lookout_sticky::StickyState;

use crate::ConfigError;

/// A state transition observed during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LookoutEvent {
    /// The fixed header was fixed or released.
    Header {
        /// New fixed flag.
        fixed: bool,
    },
    /// A reveal element changed state.
    Reveal(RevealEvent),
    /// A sticky region changed state.
    Sticky {
        /// Index of the region in discovery order.
        region: usize,
        /// State before the tick.
        from: StickyState,
        /// State after the tick.
        to: StickyState,
    },
    /// The active navigation link changed.
    Nav(SpyChange),
}

/// A sink for tick and discovery observations.
pub trait LookoutTrace {
    /// Called once per tick, before any tracker runs.
    fn tick(&mut self, snapshot: &ViewportSnapshot) {
        let _ = snapshot;
    }

    /// Called for every state transition, in the order they happened.
    fn event(&mut self, event: LookoutEvent);

    /// Called when an element's configuration was rejected during discovery.
    fn rejected(&mut self, error: &ConfigError);
}

impl LookoutTrace for () {
    fn event(&mut self, _event: LookoutEvent) {}

    fn rejected(&mut self, _error: &ConfigError) {}
}

impl<T: LookoutTrace + ?Sized> LookoutTrace for &mut T {
    fn tick(&mut self, snapshot: &ViewportSnapshot) {
        (**self).tick(snapshot);
    }

    fn event(&mut self, event: LookoutEvent) {
        (**self).event(event);
    }

    fn rejected(&mut self, error: &ConfigError) {
        (**self).rejected(error);
    }
}

/// Records everything it is told, in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    /// Transitions, oldest first.
    pub events: Vec<LookoutEvent>,
    /// Rejected configuration, oldest first.
    pub rejected: Vec<ConfigError>,
    /// Number of ticks seen.
    pub ticks: usize,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded events and rejections, keeping the tick count.
    pub fn clear(&mut self) {
        self.events.clear();
        self.rejected.clear();
    }

    /// Takes the recorded events, leaving the list empty.
    pub fn take_events(&mut self) -> Vec<LookoutEvent> {
        core::mem::take(&mut self.events)
    }
}

impl LookoutTrace for EventRecorder {
    fn tick(&mut self, _snapshot: &ViewportSnapshot) {
        self.ticks += 1;
    }

    fn event(&mut self, event: LookoutEvent) {
        self.events.push(event);
    }

    fn rejected(&mut self, error: &ConfigError) {
        self.rejected.push(error.clone());
    }
}

/// Forwards observations to [`tracing`].
///
/// Ticks are logged at `TRACE`, transitions at `DEBUG`, and rejected
/// configuration at `WARN`.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl LookoutTrace for TracingTrace {
    fn tick(&mut self, snapshot: &ViewportSnapshot) {
        tracing::trace!(
            scroll_top = snapshot.scroll_top,
            viewport_height = snapshot.viewport_height,
            document_height = snapshot.document_height,
            origin = ?snapshot.origin,
            "lookout tick"
        );
    }

    fn event(&mut self, event: LookoutEvent) {
        match event {
            LookoutEvent::Header { fixed } => {
                tracing::debug!(fixed, "header state changed");
            }
            LookoutEvent::Reveal(event) => {
                tracing::debug!(id = event.id().index(), ?event, "reveal transition");
            }
            LookoutEvent::Sticky { region, from, to } => {
                tracing::debug!(region, ?from, ?to, "sticky transition");
            }
            LookoutEvent::Nav(change) => {
                tracing::debug!(
                    previous = ?change.previous,
                    current = ?change.current,
                    "active navigation link changed"
                );
            }
        }
    }

    fn rejected(&mut self, error: &ConfigError) {
        tracing::warn!(
            attribute = %error.attribute,
            value = %error.value,
            kind = ?error.kind,
            "rejected element configuration: {error}"
        );
    }
}
