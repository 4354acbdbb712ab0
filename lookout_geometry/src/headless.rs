// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`Element`] backend.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::{Element, StyleProperty};

/// An in-memory element for headless hosts and tests.
///
/// Clones share the same node, so a `HeadlessElement` handed to a tracker can
/// be inspected afterwards through another clone. Equality is identity.
///
/// ```rust
/// use kurbo::Rect;
/// use lookout_geometry::{Element, HeadlessElement};
///
/// let el = HeadlessElement::new(Rect::new(0.0, 100.0, 200.0, 150.0))
///     .with_attribute("data-reveal-delay", "250");
/// let handle = el.clone();
/// handle.add_class("revealed");
///
/// assert!(el.has_class("revealed"));
/// assert_eq!(el.attribute("data-reveal-delay").as_deref(), Some("250"));
/// ```
#[derive(Clone, Debug)]
pub struct HeadlessElement {
    node: Rc<RefCell<Node>>,
}

#[derive(Debug)]
struct Node {
    bounds: Rect,
    classes: SmallVec<[String; 4]>,
    styles: HashMap<StyleProperty, f64>,
    attributes: HashMap<String, String>,
}

impl HeadlessElement {
    /// Creates an element occupying `bounds` in document coordinates.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                bounds,
                classes: SmallVec::new(),
                styles: HashMap::new(),
                attributes: HashMap::new(),
            })),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets a configuration attribute.
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Moves or resizes the element, as a layout pass would.
    pub fn set_bounds(&self, bounds: Rect) {
        self.node.borrow_mut().bounds = bounds;
    }

    /// Returns the class names in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.node.borrow().classes.iter().cloned().collect()
    }

    /// Returns an inline style value, if set.
    #[must_use]
    pub fn style(&self, property: StyleProperty) -> Option<f64> {
        self.node.borrow().styles.get(&property).copied()
    }

    /// Returns `true` if both handles refer to the same node.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl PartialEq for HeadlessElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl Eq for HeadlessElement {}

impl Element for HeadlessElement {
    fn bounding_box(&self) -> Rect {
        self.node.borrow().bounds
    }

    fn add_class(&self, name: &str) {
        let mut node = self.node.borrow_mut();
        if !node.classes.iter().any(|c| c == name) {
            node.classes.push(name.to_string());
        }
    }

    fn remove_class(&self, name: &str) {
        self.node.borrow_mut().classes.retain(|c| c != name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == name)
    }

    fn set_style(&self, property: StyleProperty, value: Option<f64>) {
        let mut node = self.node.borrow_mut();
        match value {
            Some(v) => {
                node.styles.insert(property, v);
            }
            None => {
                node.styles.remove(&property);
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }
}
