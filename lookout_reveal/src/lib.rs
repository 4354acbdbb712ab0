// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Reveal: scroll-driven "has this element been seen" tracking.
//!
//! A [`RevealTracker`] owns a set of observed elements. On every tick it
//! classifies each element against the current [`ViewportSnapshot`] and moves it
//! through a small state machine:
//!
//! - `Untriggered -> Triggered` once the element is fully in view (or, on the
//!   initial-load tick only, about half visible when partial activation is
//!   enabled).
//! - `Triggered -> Untriggered` when the element leaves the view, but only under
//!   [`RepeatPolicy::Repeat`]. Under [`RepeatPolicy::Once`] a triggered element
//!   stays triggered for the lifetime of the tracker.
//! - Elements taller than the viewport can never be fully in view, so they are
//!   forced to `Triggered` on every tick.
//!
//! Triggering adds the element's configured classes plus the tracker's marker
//! class; resetting removes them.
//!
//! ## Activation delays
//!
//! A non-zero [`RevealOptions::delay_ms`] staggers the visual effect. The
//! element becomes [`RevealState::Pending`] with a deadline, and is triggered by
//! [`RevealTracker::advance`] (or any later tick) once the host's clock reaches
//! it. The tracker never reads a clock itself; hosts arm a single timer for
//! [`RevealTracker::next_deadline`].
//!
//! By default a pending activation fires even if the element scrolls back out
//! of view before the deadline ([`PendingPolicy::FireAndForget`]). Hosts that
//! prefer to drop such activations can opt into
//! [`PendingPolicy::CancelOnLeave`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_geometry::{Element, HeadlessElement, TickOrigin, ViewportSnapshot};
//! use lookout_reveal::{RepeatPolicy, RevealEvent, RevealOptions, RevealTracker};
//!
//! let card = HeadlessElement::new(Rect::new(0.0, 1000.0, 300.0, 1200.0));
//! let mut tracker = RevealTracker::new();
//! let id = tracker.observe(
//!     card.clone(),
//!     RevealOptions::new().with_class("fade-in").with_repeat(RepeatPolicy::Repeat),
//! );
//!
//! // Below the fold: nothing happens.
//! let load = ViewportSnapshot::new(0.0, 800.0, 3000.0, TickOrigin::InitialLoad);
//! assert!(tracker.tick(&load, 0).is_empty());
//!
//! // Scrolled into view: triggered.
//! let scrolled = ViewportSnapshot::new(900.0, 800.0, 3000.0, TickOrigin::Scroll);
//! assert_eq!(tracker.tick(&scrolled, 16), [RevealEvent::Triggered(id)]);
//! assert!(card.has_class("fade-in"));
//! assert!(card.has_class("revealed"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ViewportSnapshot`]: lookout_geometry::ViewportSnapshot

#![no_std]

extern crate alloc;

mod options;
mod tracker;

pub use options::{PendingPolicy, RepeatPolicy, RevealOptions};
pub use tracker::{
    DEFAULT_MARKER_CLASS, RevealDebugInfo, RevealEvent, RevealId, RevealState, RevealTracker,
};
