// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Positioning state of a sticky element.
///
/// Exactly one state holds per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StickyState {
    /// In normal flow.
    #[default]
    Normal,
    /// Fixed to the top of the viewport (below a fixed header, if any).
    FixedTop,
    /// Absolutely positioned at the bottom of its container.
    AbsoluteBottom,
}

/// Per-tick inputs of [`resolve_sticky_state`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyInputs {
    /// Current scroll offset.
    pub scroll_top: f64,
    /// Cached offset top of the region: container top minus fixed header height.
    pub offset_top: f64,
    /// Document coordinate of the container's bottom edge.
    pub container_bottom: f64,
    /// Height of the container.
    pub container_height: f64,
    /// Height of the sticky element.
    pub element_height: f64,
    /// Height subtracted from the bottom trigger; the header height while the
    /// header is fixed, zero otherwise.
    pub header_offset: f64,
}

impl StickyInputs {
    /// Scroll offset at which the element stops being fixed and parks at the
    /// bottom of its container.
    #[must_use]
    pub fn bottom_trigger(&self) -> f64 {
        self.container_bottom - self.element_height - self.header_offset
    }

    /// Returns `true` if the element fits in its container and may leave
    /// normal flow.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.element_height < self.container_height
    }
}

/// Resolves the positioning state for one tick.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. `scroll_top >= offset_top && scroll_top < bottom_trigger && fits` → [`StickyState::FixedTop`]
/// 2. `scroll_top >= bottom_trigger && fits` → [`StickyState::AbsoluteBottom`]
/// 3. otherwise → [`StickyState::Normal`]
#[must_use]
pub fn resolve_sticky_state(inputs: &StickyInputs) -> StickyState {
    if !inputs.fits() {
        return StickyState::Normal;
    }
    let bottom_trigger = inputs.bottom_trigger();
    if inputs.scroll_top >= inputs.offset_top && inputs.scroll_top < bottom_trigger {
        StickyState::FixedTop
    } else if inputs.scroll_top >= bottom_trigger {
        StickyState::AbsoluteBottom
    } else {
        StickyState::Normal
    }
}
