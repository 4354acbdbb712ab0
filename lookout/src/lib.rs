// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout: viewport-position tracking for scroll-driven UI.
//!
//! This crate wires the tracking crates together behind one tick:
//!
//! - [`reveal`]: elements that gain classes once scrolled into view.
//! - [`sticky`]: elements docked to the viewport top inside their container,
//!   and the page's fixed navigation header.
//! - [`spy`]: a table of contents whose active link follows the scroll position.
//! - [`geometry`]: the [`Element`](geometry::Element) abstraction, viewport
//!   snapshots and visibility classification they all share.
//!
//! A [`Lookout`] is normally built by [`Lookout::discover`], which scans a
//! [`Document`] for marker attributes (see [`config`] for the full list), and
//! is then driven by the host: one [`Lookout::tick`] per initial load, scroll,
//! or (debounced) resize event, plus [`Lookout::advance`] when a delayed reveal
//! is due.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout::geometry::{Element, TickOrigin};
//! use lookout::{EventRecorder, HeadlessPage, Lookout, LookoutConfig};
//!
//! let mut page = HeadlessPage::new(800.0, 3000.0);
//! let intro = page.insert(Rect::new(0.0, 0.0, 960.0, 900.0));
//! intro.set_attribute("id", "intro");
//! let pricing = page.insert(Rect::new(0.0, 900.0, 960.0, 1800.0));
//! pricing.set_attribute("id", "pricing");
//! let card = page.insert(Rect::new(0.0, 1200.0, 300.0, 1400.0));
//! card.set_attribute("data-reveal", "");
//! let nav = page.insert(Rect::ZERO);
//! nav.set_attribute("data-spy", "");
//! nav.set_attribute("href", "#pricing");
//!
//! let mut trace = EventRecorder::new();
//! let mut lookout = Lookout::discover(&page, LookoutConfig::default(), &mut trace);
//! assert!(trace.rejected.is_empty());
//!
//! lookout.tick(&page, TickOrigin::InitialLoad, 0, &mut trace);
//! assert!(!card.has_class("revealed"));
//!
//! page.set_scroll_top(1000.0);
//! let outcome = lookout.tick(&page, TickOrigin::Scroll, 16, &mut trace);
//! assert!(card.has_class("revealed"));
//! assert_eq!(outcome.active_nav, Some(0));
//! assert!(nav.has_class("active"));
//! ```
//!
//! ## Observation
//!
//! Every tick and discovery takes a [`LookoutTrace`] sink. Pass `()` to ignore
//! everything, an [`EventRecorder`] to keep events, or, with the `tracing`
//! feature, `TracingTrace` to forward them to the `tracing` ecosystem.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
mod dispatcher;
mod document;
mod error;
mod lookout;
mod trace;

pub use lookout_geometry as geometry;
pub use lookout_reveal as reveal;
pub use lookout_spy as spy;
pub use lookout_sticky as sticky;

pub use config::{AttributeNames, LookoutConfig};
pub use dispatcher::{SubscriberId, TickDispatcher};
pub use document::{Document, HeadlessPage};
pub use error::{ConfigError, ConfigErrorKind};
pub use lookout::{Lookout, LookoutDebugInfo, TickOutcome};
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
pub use trace::{EventRecorder, LookoutEvent, LookoutTrace};
