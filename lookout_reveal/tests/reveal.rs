// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lookout_reveal` crate.
//!
//! These exercise whole scroll sequences against the tracker, with a focus on
//! how the repeat policy and tall elements affect the trigger classes.

use kurbo::Rect;
use lookout_geometry::{Element, HeadlessElement, TickOrigin, ViewportSnapshot};
use lookout_reveal::{RepeatPolicy, RevealEvent, RevealOptions, RevealState, RevealTracker};

const VIEWPORT: f64 = 800.0;

fn element(top: f64, height: f64) -> HeadlessElement {
    HeadlessElement::new(Rect::new(0.0, top, 640.0, top + height))
}

fn tick_at(scroll_top: f64) -> ViewportSnapshot {
    ViewportSnapshot::new(scroll_top, VIEWPORT, 6000.0, TickOrigin::Scroll)
}

#[test]
fn once_policy_never_resets() {
    let el = element(1000.0, 200.0);
    let mut tracker = RevealTracker::new();
    let id = tracker.observe(el.clone(), RevealOptions::new().with_class("pop"));

    tracker.tick(&tick_at(900.0), 0);
    assert!(tracker.has_triggered(id));

    // Far above, far below, back and forth: still triggered.
    for (i, scroll) in [0.0, 5000.0, 2000.0, 0.0, 900.0, 4000.0]
        .into_iter()
        .enumerate()
    {
        let events = tracker.tick(&tick_at(scroll), 10 * (i as u64 + 1));
        assert!(events.is_empty(), "unexpected {events:?} at {scroll}");
        assert!(tracker.has_triggered(id));
        assert!(el.has_class("pop"));
        assert!(el.has_class("revealed"));
    }
}

#[test]
fn repeat_policy_toggles_on_enter_leave_enter() {
    let el = element(1000.0, 200.0);
    let mut tracker = RevealTracker::new();
    let id = tracker.observe(
        el.clone(),
        RevealOptions::new()
            .with_class("pop")
            .with_repeat(RepeatPolicy::Repeat),
    );

    let mut seen = Vec::new();
    for (t, scroll) in [(0, 900.0), (1, 0.0), (2, 900.0)] {
        tracker.tick(&tick_at(scroll), t);
        seen.push(el.has_class("pop"));
    }
    assert_eq!(seen, [true, false, true]);
    assert_eq!(tracker.state(id), Some(RevealState::Triggered));
}

#[test]
fn repeat_policy_resets_when_scrolled_past() {
    let el = element(1000.0, 200.0);
    let mut tracker = RevealTracker::new();
    let id = tracker.observe(
        el.clone(),
        RevealOptions::new().with_repeat(RepeatPolicy::Repeat),
    );

    assert_eq!(
        tracker.tick(&tick_at(900.0), 0),
        [RevealEvent::Triggered(id)]
    );
    // Window starts at 1500; the element ended at 1200.
    assert_eq!(tracker.tick(&tick_at(1500.0), 1), [RevealEvent::Reset(id)]);
    assert!(!el.has_class("revealed"));
    // Above the window it is not fully in view, so it stays reset.
    assert!(tracker.tick(&tick_at(1600.0), 2).is_empty());
}

#[test]
fn tall_elements_are_triggered_on_every_tick() {
    let el = element(2000.0, VIEWPORT + 1.0);
    let mut tracker = RevealTracker::new();
    let id = tracker.observe(
        el.clone(),
        RevealOptions::new().with_repeat(RepeatPolicy::Repeat),
    );

    for (t, scroll) in [0.0, 1500.0, 2200.0, 5000.0, 0.0].into_iter().enumerate() {
        tracker.tick(&tick_at(scroll), t as u64);
        assert!(tracker.has_triggered(id), "not triggered at {scroll}");
        assert!(el.has_class("revealed"));
    }
}

#[test]
fn tall_element_triggers_even_if_its_class_was_removed_externally() {
    let el = element(0.0, 2000.0);
    let mut tracker = RevealTracker::new();
    tracker.observe(el.clone(), RevealOptions::new());
    tracker.tick(&tick_at(0.0), 0);

    el.remove_class("revealed");
    assert!(tracker.tick(&tick_at(10.0), 1).is_empty());
    assert!(el.has_class("revealed"));
}

#[test]
fn elements_are_evaluated_in_registration_order() {
    let mut tracker = RevealTracker::new();
    let ids: Vec<_> = (0..4)
        .map(|i| tracker.observe(element(f64::from(i) * 150.0, 100.0), RevealOptions::new()))
        .collect();

    let events = tracker.tick(&tick_at(0.0), 0);
    let order: Vec<_> = events.iter().map(RevealEvent::id).collect();
    assert_eq!(order, ids);
}
