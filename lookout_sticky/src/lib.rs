// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Sticky: scroll-driven fixed/absolute positioning.
//!
//! A [`StickyRegion`] keeps an element docked to the top of the viewport while
//! its container scrolls past, and parks it at the container's bottom edge once
//! there is no room left. Every tick resolves exactly one [`StickyState`]:
//!
//! 1. [`StickyState::FixedTop`] while `scroll_top` is between the region's
//!    offset top and the bottom trigger (`container bottom - element height`,
//!    less the header height while the header is fixed).
//! 2. [`StickyState::AbsoluteBottom`] once `scroll_top` reaches the bottom trigger.
//! 3. [`StickyState::Normal`] otherwise, and always when the element is at least
//!    as tall as its container.
//!
//! The decision itself is the pure function [`resolve_sticky_state`]; the
//! region adds the cached offset, class and inline-style bookkeeping.
//!
//! A [`FixedHeader`] tracks the page's own fixed navigation header. Its
//! [`HeaderState`] feeds regions (and scroll-spy offsets) so that sticky
//! elements dock just below it.
//!
//! ## Cached offset
//!
//! The region's offset top (`container top - fixed header height`) is the one
//! piece of cached layout. It is measured on the initial-load tick and on every
//! resize tick; hosts that mutate the page in between must call
//! [`StickyRegion::invalidate`]. Resize ticks also release the pinned width
//! before any positioning decision is made.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_geometry::{Element, HeadlessElement, TickOrigin, ViewportSnapshot};
//! use lookout_sticky::{HeaderState, StickyOptions, StickyRegion, StickyState};
//!
//! let container = HeadlessElement::new(Rect::new(0.0, 50.0, 960.0, 2050.0));
//! let sidebar = HeadlessElement::new(Rect::new(0.0, 50.0, 240.0, 150.0));
//! let mut region = StickyRegion::new(sidebar.clone(), container, StickyOptions::default());
//!
//! let load = ViewportSnapshot::new(0.0, 800.0, 4000.0, TickOrigin::InitialLoad);
//! region.update(&load, HeaderState::NONE);
//! assert_eq!(region.state(), StickyState::Normal);
//!
//! let scrolled = ViewportSnapshot::new(60.0, 800.0, 4000.0, TickOrigin::Scroll);
//! region.update(&scrolled, HeaderState::NONE);
//! assert!(region.is_fixed());
//! assert!(sidebar.has_class("sticky-fixed"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod header;
mod region;
mod state;

pub use header::{DEFAULT_HEADER_FIXED_CLASS, FixedHeader, HeaderState};
pub use region::{HeaderOffset, StickyClasses, StickyDebugInfo, StickyOptions, StickyRegion};
pub use state::{StickyInputs, StickyState, resolve_sticky_state};
