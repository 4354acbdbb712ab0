// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Rect;

/// Inline style properties written by the tracking crates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `top`, used to dock fixed elements below a fixed header.
    Top,
    /// `max-height`, used to keep fixed elements inside the viewport.
    MaxHeight,
    /// `width`, pinned while an element is taken out of flow.
    Width,
}

impl StyleProperty {
    /// The CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::MaxHeight => "max-height",
            Self::Width => "width",
        }
    }
}

/// A handle to a host element observed by the tracking crates.
///
/// Handles are cheap to clone and have identity semantics: two clones refer to
/// the same underlying element, and writes through one are visible through the
/// other. This mirrors how DOM node references behave and is why every method
/// takes `&self`.
///
/// Implementations are expected to be infallible. An element that is no longer
/// attached to its document may report any bounding box.
pub trait Element: Clone {
    /// Returns the element's border box in document coordinates.
    ///
    /// `y0` is the top edge including the current scroll offset.
    fn bounding_box(&self) -> Rect;

    /// Adds a class name. Adding a class that is already present is a no-op.
    fn add_class(&self, name: &str);

    /// Removes a class name. Removing an absent class is a no-op.
    fn remove_class(&self, name: &str);

    /// Returns `true` if the class name is present.
    fn has_class(&self, name: &str) -> bool;

    /// Sets an inline style property in pixels, or removes it when `value` is `None`.
    fn set_style(&self, property: StyleProperty, value: Option<f64>);

    /// Returns the value of a configuration attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Adds or removes `name` depending on `on`.
    fn toggle_class(&self, name: &str, on: bool) {
        if on {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StyleProperty;

    #[test]
    fn css_names() {
        assert_eq!(StyleProperty::Top.css_name(), "top");
        assert_eq!(StyleProperty::MaxHeight.css_name(), "max-height");
        assert_eq!(StyleProperty::Width.css_name(), "width");
    }
}
