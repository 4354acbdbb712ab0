// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use lookout_geometry::{Element, ViewportSnapshot};

/// Class added to the active link unless overridden.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// A navigation link and the section it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink<E> {
    /// The link element that receives the active class.
    pub link: E,
    /// The section element whose position decides activation.
    pub target: E,
}

/// A change of active link reported by [`ScrollSpy::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpyChange {
    /// Previously active link index.
    pub previous: Option<usize>,
    /// Newly active link index.
    pub current: Option<usize>,
}

/// Picks the active entry from target tops in document order.
///
/// `target_tops` should already have the header height subtracted. Returns the
/// index of the candidate with the greatest top, or the last index when
/// `scroll_top >= max_scroll`, or `None` when nothing qualifies. Ties go to the
/// later entry.
#[must_use]
pub fn active_index(
    target_tops: impl IntoIterator<Item = f64>,
    scroll_top: f64,
    max_scroll: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    let mut len = 0;
    for (index, top) in target_tops.into_iter().enumerate() {
        len = index + 1;
        if scroll_top >= top && best.is_none_or(|(_, best_top)| top >= best_top) {
            best = Some((index, top));
        }
    }
    if len > 0 && scroll_top >= max_scroll {
        return Some(len - 1);
    }
    best.map(|(index, _)| index)
}

/// Ordered navigation links with at most one active entry.
#[derive(Clone, Debug)]
pub struct ScrollSpy<E> {
    links: Vec<NavLink<E>>,
    active: Option<usize>,
    active_class: String,
    skipped: usize,
}

impl<E: Element> Default for ScrollSpy<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> ScrollSpy<E> {
    /// Creates an empty spy using [`DEFAULT_ACTIVE_CLASS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_active_class(DEFAULT_ACTIVE_CLASS)
    }

    /// Creates an empty spy with a custom active class.
    #[must_use]
    pub fn with_active_class(active_class: &str) -> Self {
        Self {
            links: Vec::new(),
            active: None,
            active_class: active_class.to_string(),
            skipped: 0,
        }
    }

    /// Appends a link in document order.
    ///
    /// A link without a resolvable target is skipped and `None` is returned;
    /// otherwise returns the link's index.
    pub fn push(&mut self, link: E, target: Option<E>) -> Option<usize> {
        let Some(target) = target else {
            self.skipped += 1;
            return None;
        };
        self.links.push(NavLink { link, target });
        Some(self.links.len() - 1)
    }

    /// Number of tracked links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no link is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Tracked links in document order.
    #[must_use]
    pub fn links(&self) -> &[NavLink<E>] {
        &self.links
    }

    /// Index of the active link.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The active link element.
    #[must_use]
    pub fn active_link(&self) -> Option<&E> {
        self.active.map(|i| &self.links[i].link)
    }

    /// Recomputes the active link for one tick.
    ///
    /// `header_height` is subtracted from every target top. Returns the change
    /// if the active link moved.
    pub fn update(&mut self, snapshot: &ViewportSnapshot, header_height: f64) -> Option<SpyChange> {
        let next = active_index(
            self.links
                .iter()
                .map(|l| l.target.bounding_box().y0 - header_height),
            snapshot.scroll_top,
            snapshot.max_scroll(),
        );
        if next == self.active {
            return None;
        }
        if let Some(previous) = self.active {
            self.links[previous].link.remove_class(&self.active_class);
        }
        if let Some(current) = next {
            self.links[current].link.add_class(&self.active_class);
        }
        let change = SpyChange {
            previous: self.active,
            current: next,
        };
        self.active = next;
        Some(change)
    }

    /// Snapshot of the spy state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SpyDebugInfo {
        SpyDebugInfo {
            links: self.links.len(),
            skipped: self.skipped,
            active: self.active,
        }
    }
}

/// Debug snapshot of a [`ScrollSpy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpyDebugInfo {
    /// Number of tracked links.
    pub links: usize,
    /// Links dropped because their target did not resolve.
    pub skipped: usize,
    /// Active link index.
    pub active: Option<usize>,
}
