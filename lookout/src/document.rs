// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page the composition root discovers elements in.

use alloc::vec::Vec;

use kurbo::Rect;
use lookout_geometry::{Element, HeadlessElement, ViewportSource};

/// A page: its viewport plus element lookup.
///
/// Lookups return elements in document order.
pub trait Document: ViewportSource {
    /// Element handle type.
    type Element: Element;

    /// All elements carrying attribute `name`, whatever its value.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;

    /// The element whose `id` is `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The parent of `element`, if it has one.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;
}

/// An in-memory [`Document`] of [`HeadlessElement`]s.
///
/// Elements are kept in insertion order, which is taken as document order.
#[derive(Clone, Debug)]
pub struct HeadlessPage {
    scroll_top: f64,
    viewport_height: f64,
    document_height: f64,
    nodes: Vec<PageNode>,
}

#[derive(Clone, Debug)]
struct PageNode {
    element: HeadlessElement,
    parent: Option<usize>,
}

impl HeadlessPage {
    /// Creates an empty page scrolled to the top.
    #[must_use]
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            viewport_height,
            document_height,
            nodes: Vec::new(),
        }
    }

    /// Adds a top-level element occupying `bounds`.
    pub fn insert(&mut self, bounds: Rect) -> HeadlessElement {
        self.push(bounds, None)
    }

    /// Adds an element occupying `bounds` as a child of `parent`.
    ///
    /// If `parent` is not on this page the element is added at top level.
    pub fn insert_child(&mut self, parent: &HeadlessElement, bounds: Rect) -> HeadlessElement {
        let parent = self.index_of(parent);
        self.push(bounds, parent)
    }

    /// Scrolls the viewport.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    /// Resizes the viewport.
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    /// Changes the scrollable height.
    pub fn set_document_height(&mut self, document_height: f64) {
        self.document_height = document_height;
    }

    /// Number of elements on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, bounds: Rect, parent: Option<usize>) -> HeadlessElement {
        let element = HeadlessElement::new(bounds);
        self.nodes.push(PageNode {
            element: element.clone(),
            parent,
        });
        element
    }

    fn index_of(&self, element: &HeadlessElement) -> Option<usize> {
        self.nodes.iter().position(|n| n.element.same_node(element))
    }
}

impl ViewportSource for HeadlessPage {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }
}

impl Document for HeadlessPage {
    type Element = HeadlessElement;

    fn elements_with_attribute(&self, name: &str) -> Vec<HeadlessElement> {
        self.nodes
            .iter()
            .filter(|n| n.element.attribute(name).is_some())
            .map(|n| n.element.clone())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<HeadlessElement> {
        self.nodes
            .iter()
            .find(|n| n.element.attribute("id").as_deref() == Some(id))
            .map(|n| n.element.clone())
    }

    fn parent(&self, element: &HeadlessElement) -> Option<HeadlessElement> {
        let parent = self.nodes[self.index_of(element)?].parent?;
        Some(self.nodes[parent].element.clone())
    }
}
