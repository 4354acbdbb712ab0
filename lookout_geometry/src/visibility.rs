// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of a box against the visible window.

use kurbo::Rect;

use crate::ViewportSnapshot;

bitflags::bitflags! {
    /// How a box relates to the visible window.
    ///
    /// The flags are not exhaustive and not mutually exclusive. A box taller
    /// than the viewport is never [`FULLY_IN_VIEW`](Self::FULLY_IN_VIEW) but may
    /// be both [`PARTIALLY_IN_VIEW`](Self::PARTIALLY_IN_VIEW) and not
    /// [`OUT_OF_VIEW`](Self::OUT_OF_VIEW).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Visibility: u8 {
        /// Top and bottom edges are both inside the visible window.
        const FULLY_IN_VIEW        = 0b0000_0001;
        /// The box is entirely above or entirely below the visible window.
        const OUT_OF_VIEW          = 0b0000_0010;
        /// The box's vertical midpoint has scrolled above the window's bottom edge.
        ///
        /// This is a loose "about half visible" heuristic rather than an
        /// intersection test. A box far above the window also satisfies it.
        const PARTIALLY_IN_VIEW    = 0b0000_0100;
        /// The box is taller than the viewport and can never be fully in view.
        const TALLER_THAN_VIEWPORT = 0b0000_1000;
    }
}

impl Visibility {
    /// Shorthand for `contains(FULLY_IN_VIEW)`.
    #[must_use]
    pub fn is_fully_in_view(self) -> bool {
        self.contains(Self::FULLY_IN_VIEW)
    }

    /// Shorthand for `contains(OUT_OF_VIEW)`.
    #[must_use]
    pub fn is_out_of_view(self) -> bool {
        self.contains(Self::OUT_OF_VIEW)
    }

    /// Shorthand for `contains(PARTIALLY_IN_VIEW)`.
    #[must_use]
    pub fn is_partially_in_view(self) -> bool {
        self.contains(Self::PARTIALLY_IN_VIEW)
    }

    /// Shorthand for `contains(TALLER_THAN_VIEWPORT)`.
    #[must_use]
    pub fn is_taller_than_viewport(self) -> bool {
        self.contains(Self::TALLER_THAN_VIEWPORT)
    }
}

/// Classifies a document-space box against the visible window of `viewport`.
///
/// With `top = bounds.y0`, `height = bounds.height()` and
/// `bottom = viewport.scroll_top + viewport.viewport_height`:
///
/// - fully in view: `top >= scroll_top && top + height <= bottom`
/// - out of view: `top + height < scroll_top || top > bottom`
/// - partially in view: `top + height - height / 2 <= bottom`
/// - taller than viewport: `height > viewport_height`
///
/// Edges are inclusive for the in-view tests, so a box that exactly fills the
/// window is fully in view.
#[must_use]
pub fn classify(bounds: Rect, viewport: &ViewportSnapshot) -> Visibility {
    let top = bounds.y0;
    let height = bounds.height();
    let bottom = top + height;
    let window_top = viewport.scroll_top;
    let window_bottom = viewport.visible_bottom();

    let mut vis = Visibility::empty();
    if top >= window_top && bottom <= window_bottom {
        vis |= Visibility::FULLY_IN_VIEW;
    }
    if bottom < window_top || top > window_bottom {
        vis |= Visibility::OUT_OF_VIEW;
    }
    if bottom - height / 2.0 <= window_bottom {
        vis |= Visibility::PARTIALLY_IN_VIEW;
    }
    if height > viewport.viewport_height {
        vis |= Visibility::TALLER_THAN_VIEWPORT;
    }
    vis
}
