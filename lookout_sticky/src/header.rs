// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use lookout_geometry::{Element, ViewportSnapshot};

/// Class toggled on a [`FixedHeader`] while it is fixed, unless overridden.
pub const DEFAULT_HEADER_FIXED_CLASS: &str = "header-fixed";

/// What other trackers need to know about the page's fixed header.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HeaderState {
    /// Measured header height.
    pub height: f64,
    /// Whether the header is currently in its fixed state.
    pub is_fixed: bool,
}

impl HeaderState {
    /// No header on the page.
    pub const NONE: Self = Self {
        height: 0.0,
        is_fixed: false,
    };

    /// Height to keep clear at the top of the viewport: the header height while
    /// fixed, zero otherwise.
    #[must_use]
    pub fn occluded_height(&self) -> f64 {
        if self.is_fixed { self.height } else { 0.0 }
    }
}

/// Tracks a navigation header that becomes fixed once scrolled past.
///
/// The header is fixed while `scroll_top` is greater than its in-flow document
/// top. The threshold and height are measured on the first tick and on every
/// layout-changing tick; while fixed, only the height is re-measured because
/// the in-flow position is no longer observable.
#[derive(Clone, Debug)]
pub struct FixedHeader<E> {
    element: E,
    fixed_class: String,
    threshold: Option<f64>,
    height: f64,
    is_fixed: bool,
}

impl<E: Element> FixedHeader<E> {
    /// Watches `element` using [`DEFAULT_HEADER_FIXED_CLASS`].
    #[must_use]
    pub fn new(element: E) -> Self {
        Self::with_fixed_class(element, DEFAULT_HEADER_FIXED_CLASS)
    }

    /// Watches `element` with a custom fixed class.
    #[must_use]
    pub fn with_fixed_class(element: E, fixed_class: &str) -> Self {
        Self {
            element,
            fixed_class: fixed_class.to_string(),
            threshold: None,
            height: 0.0,
            is_fixed: false,
        }
    }

    /// The header element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Scroll offset past which the header is fixed, once measured.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Current header state.
    #[must_use]
    pub fn state(&self) -> HeaderState {
        HeaderState {
            height: self.height,
            is_fixed: self.is_fixed,
        }
    }

    /// Returns `true` while the header is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Forgets the measured threshold so the next tick re-measures it.
    pub fn invalidate(&mut self) {
        if !self.is_fixed {
            self.threshold = None;
        }
    }

    /// Evaluates the header for one tick.
    ///
    /// Returns the new fixed flag if it changed.
    pub fn update(&mut self, snapshot: &ViewportSnapshot) -> Option<bool> {
        if snapshot.is_layout_change() || self.threshold.is_none() {
            let bounds = self.element.bounding_box();
            self.height = bounds.height();
            if !self.is_fixed || self.threshold.is_none() {
                self.threshold = Some(bounds.y0);
            }
        }

        let threshold = self.threshold.unwrap_or(0.0);
        let fixed = snapshot.scroll_top > threshold;
        self.element.toggle_class(&self.fixed_class, fixed);
        if fixed == self.is_fixed {
            return None;
        }
        self.is_fixed = fixed;
        Some(fixed)
    }
}
