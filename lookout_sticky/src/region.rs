// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use lookout_geometry::{Element, StyleProperty, TickOrigin, ViewportSnapshot};

use crate::{HeaderState, StickyInputs, StickyState, resolve_sticky_state};

/// Class names applied for each [`StickyState`].
///
/// Exactly one of them is present on the element after every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickyClasses {
    /// Applied in [`StickyState::Normal`].
    pub normal: String,
    /// Applied in [`StickyState::FixedTop`].
    pub fixed: String,
    /// Applied in [`StickyState::AbsoluteBottom`].
    pub bottom: String,
}

impl Default for StickyClasses {
    fn default() -> Self {
        Self {
            normal: "sticky-top".to_string(),
            fixed: "sticky-fixed".to_string(),
            bottom: "sticky-bottom".to_string(),
        }
    }
}

impl StickyClasses {
    /// The class for `state`.
    #[must_use]
    pub fn for_state(&self, state: StickyState) -> &str {
        match state {
            StickyState::Normal => &self.normal,
            StickyState::FixedTop => &self.fixed,
            StickyState::AbsoluteBottom => &self.bottom,
        }
    }
}

/// Which fixed header height a region subtracts from its container top.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HeaderOffset {
    /// Use the measured height of the page's fixed header.
    #[default]
    FromHeader,
    /// Ignore any header.
    None,
    /// Use a fixed height in pixels.
    Pixels(f64),
}

impl HeaderOffset {
    fn resolve(self, header: HeaderState) -> f64 {
        match self {
            Self::FromHeader => header.height,
            Self::None => 0.0,
            Self::Pixels(px) => px,
        }
    }
}

/// Per-region configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StickyOptions {
    /// Header height subtracted from the container top.
    pub header_offset: HeaderOffset,
    /// While fixed, limit `max-height` to the viewport space below the docking offset.
    pub constrain_height: bool,
    /// Class names per state.
    pub classes: StickyClasses,
}

/// An element kept docked inside a scrolling container.
///
/// See the [crate documentation](crate) for the state rules.
#[derive(Clone, Debug)]
pub struct StickyRegion<E> {
    element: E,
    container: E,
    options: StickyOptions,
    fixed_header_height: f64,
    offset_top: Option<f64>,
    pinned_width: Option<f64>,
    state: StickyState,
}

impl<E: Element> StickyRegion<E> {
    /// Creates a region for `element` inside `container`.
    ///
    /// Nothing is measured until the first [`update`](Self::update).
    #[must_use]
    pub fn new(element: E, container: E, options: StickyOptions) -> Self {
        Self {
            element,
            container,
            options,
            fixed_header_height: 0.0,
            offset_top: None,
            pinned_width: None,
            state: StickyState::Normal,
        }
    }

    /// The sticky element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The container the element is kept inside.
    #[must_use]
    pub fn container(&self) -> &E {
        &self.container
    }

    /// The region's options.
    #[must_use]
    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StickyState {
        self.state
    }

    /// Returns `true` while the element is fixed to the top of the viewport.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.state == StickyState::FixedTop
    }

    /// The cached offset top, or `None` if it must be re-measured.
    #[must_use]
    pub fn computed_offset_top(&self) -> Option<f64> {
        self.offset_top
    }

    /// Marks the cached offset as stale.
    ///
    /// Call this after DOM mutations that move the container without a resize.
    pub fn invalidate(&mut self) {
        self.offset_top = None;
    }

    /// Evaluates the region for one tick.
    ///
    /// Returns `(previous, current)` if the state changed.
    pub fn update(
        &mut self,
        snapshot: &ViewportSnapshot,
        header: HeaderState,
    ) -> Option<(StickyState, StickyState)> {
        if snapshot.origin == TickOrigin::Resize {
            self.release_width();
        }
        if snapshot.is_layout_change() || self.offset_top.is_none() {
            self.measure(header);
        }

        let container = self.container.bounding_box();
        let inputs = StickyInputs {
            scroll_top: snapshot.scroll_top,
            offset_top: self.offset_top.unwrap_or(container.y0),
            container_bottom: container.y1,
            container_height: container.height(),
            element_height: self.element.bounding_box().height(),
            header_offset: header.occluded_height(),
        };
        let next = resolve_sticky_state(&inputs);
        self.apply(next, snapshot, header);

        let previous = self.state;
        self.state = next;
        (previous != next).then_some((previous, next))
    }

    /// Snapshot of the region state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> StickyDebugInfo {
        StickyDebugInfo {
            state: self.state,
            computed_offset_top: self.offset_top,
            fixed_header_height: self.fixed_header_height,
            pinned_width: self.pinned_width,
            constrain_height: self.options.constrain_height,
        }
    }

    fn measure(&mut self, header: HeaderState) {
        self.fixed_header_height = self.options.header_offset.resolve(header);
        self.offset_top = Some(self.container.bounding_box().y0 - self.fixed_header_height);
    }

    fn release_width(&mut self) {
        self.pinned_width = None;
        self.element.set_style(StyleProperty::Width, None);
    }

    fn apply(&mut self, next: StickyState, snapshot: &ViewportSnapshot, header: HeaderState) {
        let classes = &self.options.classes;
        for state in [
            StickyState::Normal,
            StickyState::FixedTop,
            StickyState::AbsoluteBottom,
        ] {
            self.element
                .toggle_class(classes.for_state(state), state == next);
        }

        match next {
            StickyState::Normal => {
                self.element.set_style(StyleProperty::Top, Some(0.0));
                self.element.set_style(StyleProperty::MaxHeight, None);
                if self.pinned_width.is_some() {
                    self.release_width();
                }
            }
            StickyState::FixedTop => {
                self.pin_width();
                let top = header.occluded_height();
                self.element.set_style(StyleProperty::Top, Some(top));
                let max_height = self
                    .options
                    .constrain_height
                    .then_some(snapshot.viewport_height - top);
                self.element.set_style(StyleProperty::MaxHeight, max_height);
            }
            StickyState::AbsoluteBottom => {
                self.pin_width();
                self.element.set_style(StyleProperty::MaxHeight, None);
            }
        }
    }

    fn pin_width(&mut self) {
        if self.pinned_width.is_none() {
            let width = self.element.bounding_box().width();
            self.pinned_width = Some(width);
            self.element.set_style(StyleProperty::Width, Some(width));
        }
    }
}

/// Debug snapshot of a [`StickyRegion`].
#[derive(Clone, Debug, PartialEq)]
pub struct StickyDebugInfo {
    /// Current state.
    pub state: StickyState,
    /// Cached offset top, if measured.
    pub computed_offset_top: Option<f64>,
    /// Header height subtracted at the last measurement.
    pub fixed_header_height: f64,
    /// Width pinned while out of flow.
    pub pinned_width: Option<f64>,
    /// Whether `max-height` is constrained while fixed.
    pub constrain_height: bool,
}
