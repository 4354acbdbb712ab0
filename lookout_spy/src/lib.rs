// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Spy: table-of-contents style navigation highlighting.
//!
//! A [`ScrollSpy`] holds an ordered set of navigation links, each paired with
//! the section element it points at. On every tick it picks at most one active
//! link:
//!
//! - A link is a candidate once `scroll_top >= target top - header height`.
//! - Among candidates, the one with the greatest target top wins (the last
//!   section scrolled past).
//! - When the viewport is scrolled to the end of the document, the last link
//!   is active regardless, so short trailing sections can still be reached.
//! - If nothing qualifies, no link is active.
//!
//! Links whose target cannot be resolved are skipped when the spy is built,
//! so one missing anchor never disables the rest of the navigation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_geometry::{Element, HeadlessElement, TickOrigin, ViewportSnapshot};
//! use lookout_spy::ScrollSpy;
//!
//! let section = |top: f64| HeadlessElement::new(Rect::new(0.0, top, 800.0, top + 400.0));
//! let links: Vec<_> = (0..3).map(|_| HeadlessElement::new(Rect::ZERO)).collect();
//!
//! let mut spy = ScrollSpy::new();
//! spy.push(links[0].clone(), Some(section(0.0)));
//! spy.push(links[1].clone(), Some(section(500.0)));
//! spy.push(links[2].clone(), Some(section(1200.0)));
//!
//! let at = |scroll_top| ViewportSnapshot::new(scroll_top, 800.0, 2100.0, TickOrigin::Scroll);
//! spy.update(&at(600.0), 0.0);
//! assert_eq!(spy.active(), Some(1));
//! assert!(links[1].has_class("active"));
//!
//! spy.update(&at(1300.0), 0.0);
//! assert_eq!(spy.active(), Some(2));
//! assert!(!links[1].has_class("active"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod spy;

pub use spy::{DEFAULT_ACTIVE_CLASS, NavLink, ScrollSpy, SpyChange, SpyDebugInfo, active_index};
