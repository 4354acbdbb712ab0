// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lookout_spy` crate.
//!
//! These scroll a three-section page from top to bottom and check which link
//! carries the active class.

use kurbo::Rect;
use lookout_geometry::{Element, HeadlessElement, TickOrigin, ViewportSnapshot};
use lookout_spy::ScrollSpy;

struct Page {
    links: Vec<HeadlessElement>,
    spy: ScrollSpy<HeadlessElement>,
}

/// Sections at 0, 500 and 1200 in a 2100px document viewed through 800px.
fn three_sections() -> Page {
    let mut spy = ScrollSpy::new();
    let mut links = Vec::new();
    for (top, height) in [(0.0, 500.0), (500.0, 700.0), (1200.0, 900.0)] {
        let link = HeadlessElement::new(Rect::ZERO);
        let section = HeadlessElement::new(Rect::new(0.0, top, 960.0, top + height));
        spy.push(link.clone(), Some(section));
        links.push(link);
    }
    Page { links, spy }
}

fn at(scroll_top: f64) -> ViewportSnapshot {
    ViewportSnapshot::new(scroll_top, 800.0, 2100.0, TickOrigin::Scroll)
}

#[test]
fn second_section_active_mid_page() {
    let mut page = three_sections();
    page.spy.update(&at(600.0), 0.0);
    assert_eq!(page.spy.active(), Some(1));
}

#[test]
fn last_link_forced_at_bottom_of_document() {
    let mut page = three_sections();
    page.spy.update(&at(1300.0), 0.0);
    assert_eq!(page.spy.active(), Some(2));

    // A negative offset moves the last target to 1400, below the maximum
    // scroll offset. The bottom edge still activates it.
    let mut page = three_sections();
    page.spy.update(&at(1300.0), -200.0);
    assert_eq!(page.spy.active(), Some(2));
}

#[test]
fn at_most_one_active_link_per_tick() {
    let mut page = three_sections();
    let mut scroll = 0.0;
    while scroll <= 1300.0 {
        page.spy.update(&at(scroll), 0.0);
        let active: Vec<_> = page
            .links
            .iter()
            .enumerate()
            .filter(|(_, l)| l.has_class("active"))
            .map(|(i, _)| i)
            .collect();
        assert!(active.len() <= 1, "{active:?} at {scroll}");
        assert_eq!(active.first().copied(), page.spy.active());
        scroll += 25.0;
    }
    assert_eq!(page.spy.active(), Some(2));
}
