// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookout Geometry: element and viewport primitives for scroll tracking.
//!
//! This crate is the shared vocabulary of the Lookout crates. It provides:
//! - [`Element`]: a small handle abstraction over a host's element (a DOM
//!   node, a retained-mode widget, an in-memory test node). All tracking
//!   algorithms are written once against this trait.
//! - [`ViewportSource`] and [`ViewportSnapshot`]: the scroll offset, viewport
//!   height, and document height captured once per tick.
//! - [`classify`]: the relationship of a document-space box to the visible
//!   window, as a set of non-exclusive [`Visibility`] flags.
//! - [`HeadlessElement`]: an in-memory [`Element`] for headless hosts and tests.
//!
//! It does **not** subscribe to any events. Hosts capture a snapshot on
//! initial load, scroll, and resize and hand it to the tracking crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_geometry::{TickOrigin, ViewportSnapshot, Visibility, classify};
//!
//! // An 800px tall viewport scrolled to 900px, over a 3000px document.
//! let viewport = ViewportSnapshot::new(900.0, 800.0, 3000.0, TickOrigin::Scroll);
//!
//! // A 200px tall element whose top sits 1000px into the document.
//! let bounds = Rect::new(0.0, 1000.0, 320.0, 1200.0);
//!
//! let vis = classify(bounds, &viewport);
//! assert!(vis.contains(Visibility::FULLY_IN_VIEW));
//! assert!(!vis.contains(Visibility::OUT_OF_VIEW));
//! ```
//!
//! All coordinates are document coordinates: they include the current scroll
//! offset. Elements handed to this crate must be attached to their document;
//! geometry of detached elements is unspecified.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod headless;
mod viewport;
mod visibility;

pub use element::{Element, StyleProperty};
pub use headless::HeadlessElement;
pub use viewport::{TickOrigin, ViewportSnapshot, ViewportSource};
pub use visibility::{Visibility, classify};
