// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// What caused a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TickOrigin {
    /// The first tick after the page finished loading.
    #[default]
    InitialLoad,
    /// The viewport scrolled.
    Scroll,
    /// The viewport was resized.
    ///
    /// Resize ticks invalidate cached layout such as sticky offsets and pinned
    /// widths.
    Resize,
}

/// Immutable viewport state captured once per tick.
///
/// Every tracker reads the same snapshot during a tick, so all decisions made
/// within one tick agree on where the viewport is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSnapshot {
    /// Vertical scroll offset of the viewport in document coordinates.
    pub scroll_top: f64,
    /// Height of the visible window.
    pub viewport_height: f64,
    /// Total scrollable height of the document.
    pub document_height: f64,
    /// What caused this tick.
    pub origin: TickOrigin,
}

impl ViewportSnapshot {
    /// Creates a snapshot from raw values.
    #[must_use]
    pub const fn new(
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
        origin: TickOrigin,
    ) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
            origin,
        }
    }

    /// Returns `true` for the tick fired once the page has loaded.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.origin == TickOrigin::InitialLoad
    }

    /// Returns `true` for ticks that may have changed the page layout.
    #[must_use]
    pub fn is_layout_change(&self) -> bool {
        matches!(self.origin, TickOrigin::InitialLoad | TickOrigin::Resize)
    }

    /// Document coordinate of the bottom edge of the visible window.
    #[must_use]
    pub fn visible_bottom(&self) -> f64 {
        self.scroll_top + self.viewport_height
    }

    /// The visible window as a document-space range.
    #[must_use]
    pub fn visible_range(&self) -> Range<f64> {
        self.scroll_top..self.visible_bottom()
    }

    /// Largest scroll offset the document allows.
    ///
    /// This is zero or negative for documents no taller than the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Returns `true` when the viewport is scrolled to the end of the document.
    #[must_use]
    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll()
    }
}

/// Source of the viewport values a tick is built from.
///
/// Hosts implement this over their window or scroll container.
pub trait ViewportSource {
    /// Current vertical scroll offset.
    fn scroll_top(&self) -> f64;

    /// Current height of the visible window.
    fn viewport_height(&self) -> f64;

    /// Current total height of the document.
    fn document_height(&self) -> f64;

    /// Captures a snapshot for a tick caused by `origin`.
    fn snapshot(&self, origin: TickOrigin) -> ViewportSnapshot {
        ViewportSnapshot::new(
            self.scroll_top(),
            self.viewport_height(),
            self.document_height(),
            origin,
        )
    }
}
