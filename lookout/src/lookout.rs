// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use lookout_geometry::{Element, TickOrigin, ViewportSnapshot, ViewportSource};
use lookout_reveal::{RevealDebugInfo, RevealEvent, RevealId, RevealOptions, RevealTracker};
use lookout_spy::{ScrollSpy, SpyDebugInfo};
use lookout_sticky::{FixedHeader, HeaderState, StickyDebugInfo, StickyOptions, StickyRegion};
use smallvec::SmallVec;

use crate::config::fragment;
use crate::{
    ConfigError, ConfigErrorKind, Document, LookoutConfig, LookoutEvent, LookoutTrace,
    SubscriberId, TickDispatcher,
};

/// What one tick changed, and the derived values after it.
///
/// Extra subscribers receive this by mutable reference after the built-in
/// trackers have run.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// The snapshot every tracker read.
    pub snapshot: ViewportSnapshot,
    /// Fixed header state after the tick.
    pub header: HeaderState,
    /// Active navigation link index after the tick.
    pub active_nav: Option<usize>,
    /// Transitions, in the order the trackers ran.
    pub events: SmallVec<[LookoutEvent; 8]>,
}

/// Composition root: every tracker on a page, driven by one tick.
///
/// Within a tick the trackers run in a fixed order: fixed header, reveal
/// tracker, sticky regions, scroll spy, then extra subscribers. The header runs
/// first because sticky regions and the spy read its state.
#[derive(Debug)]
pub struct Lookout<E> {
    config: LookoutConfig,
    header: Option<FixedHeader<E>>,
    reveal: RevealTracker<E>,
    sticky: Vec<StickyRegion<E>>,
    spy: ScrollSpy<E>,
    subscribers: TickDispatcher<TickOutcome>,
    scratch: Vec<RevealEvent>,
}

impl<E: Element> Default for Lookout<E> {
    fn default() -> Self {
        Self::new(LookoutConfig::default())
    }
}

impl<E: Element> Lookout<E> {
    /// Creates a composition root with no tracked elements.
    #[must_use]
    pub fn new(config: LookoutConfig) -> Self {
        let mut reveal = RevealTracker::with_marker_class(&config.reveal_marker_class);
        reveal.set_pending_policy(config.pending_policy);
        let spy = ScrollSpy::with_active_class(&config.active_class);
        Self {
            config,
            header: None,
            reveal,
            sticky: Vec::new(),
            spy,
            subscribers: TickDispatcher::new(),
            scratch: Vec::new(),
        }
    }

    /// Builds every tracker from the attributes found on `document`.
    ///
    /// Missing markers are not an error. Malformed options fall back to the
    /// configured defaults, and sticky elements or navigation links whose
    /// references do not resolve are skipped; both are reported to `trace`.
    pub fn discover<D, T>(document: &D, config: LookoutConfig, mut trace: T) -> Self
    where
        D: Document<Element = E> + ?Sized,
        T: LookoutTrace,
    {
        let mut lookout = Self::new(config);
        let names = lookout.config.attributes.clone();

        if let Some(header) = document
            .elements_with_attribute(&names.fixed_header)
            .into_iter()
            .next()
        {
            lookout.set_header(header);
        }

        for element in document.elements_with_attribute(&names.reveal) {
            let options = lookout
                .config
                .reveal_options(&element)
                .unwrap_or_else(|err| {
                    trace.rejected(&err);
                    lookout.config.reveal_defaults.clone()
                });
            lookout.observe(element, options);
        }

        for element in document.elements_with_attribute(&names.sticky) {
            let reference = element.attribute(&names.sticky).unwrap_or_default();
            let id = reference.trim();
            let container = if id.is_empty() {
                document.parent(&element)
            } else {
                document.element_by_id(id)
            };
            let Some(container) = container else {
                trace.rejected(&ConfigError::new(
                    &names.sticky,
                    &reference,
                    ConfigErrorKind::UnresolvedContainer,
                ));
                continue;
            };
            let options = lookout
                .config
                .sticky_options(&element)
                .unwrap_or_else(|err| {
                    trace.rejected(&err);
                    lookout.config.sticky_defaults.clone()
                });
            lookout.add_sticky(element, container, options);
        }

        for link in document.elements_with_attribute(&names.spy) {
            let href = link.attribute(&names.spy_href).unwrap_or_default();
            let target = fragment(&href).and_then(|id| document.element_by_id(id));
            if target.is_none() {
                trace.rejected(&ConfigError::new(
                    &names.spy_href,
                    &href,
                    ConfigErrorKind::UnresolvedTarget,
                ));
            }
            lookout.add_nav_link(link, target);
        }

        lookout
    }

    /// The configuration this root was built with.
    #[must_use]
    pub fn config(&self) -> &LookoutConfig {
        &self.config
    }

    /// Tracks `element` as the page's fixed header, replacing any previous one.
    pub fn set_header(&mut self, element: E) {
        self.header = Some(FixedHeader::with_fixed_class(
            element,
            &self.config.header_fixed_class,
        ));
    }

    /// Observes `element` for reveal-on-scroll.
    pub fn observe(&mut self, element: E, options: RevealOptions) -> RevealId {
        self.reveal.observe(element, options)
    }

    /// Adds a sticky region. Returns its index.
    pub fn add_sticky(&mut self, element: E, container: E, options: StickyOptions) -> usize {
        self.sticky
            .push(StickyRegion::new(element, container, options));
        self.sticky.len() - 1
    }

    /// Appends a navigation link. See [`ScrollSpy::push`].
    pub fn add_nav_link(&mut self, link: E, target: Option<E>) -> Option<usize> {
        self.spy.push(link, target)
    }

    /// Registers an extra per-tick handler, run after the built-in trackers.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&ViewportSnapshot, &mut TickOutcome) + 'static,
    {
        self.subscribers.subscribe(handler)
    }

    /// Removes an extra handler.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Captures a snapshot from `viewport` and runs one tick.
    pub fn tick<V, T>(
        &mut self,
        viewport: &V,
        origin: TickOrigin,
        now_ms: u64,
        trace: T,
    ) -> TickOutcome
    where
        V: ViewportSource + ?Sized,
        T: LookoutTrace,
    {
        let snapshot = viewport.snapshot(origin);
        self.tick_snapshot(&snapshot, now_ms, trace)
    }

    /// Runs one tick against an already captured snapshot.
    pub fn tick_snapshot<T: LookoutTrace>(
        &mut self,
        snapshot: &ViewportSnapshot,
        now_ms: u64,
        mut trace: T,
    ) -> TickOutcome {
        trace.tick(snapshot);
        let mut events: SmallVec<[LookoutEvent; 8]> = SmallVec::new();

        if let Some(header) = &mut self.header
            && let Some(fixed) = header.update(snapshot)
        {
            events.push(LookoutEvent::Header { fixed });
        }
        let header = self.header_state();

        self.scratch.clear();
        self.reveal.tick_into(snapshot, now_ms, &mut self.scratch);
        events.extend(self.scratch.drain(..).map(LookoutEvent::Reveal));

        for (region, sticky) in self.sticky.iter_mut().enumerate() {
            if let Some((from, to)) = sticky.update(snapshot, header) {
                events.push(LookoutEvent::Sticky { region, from, to });
            }
        }

        if let Some(change) = self.spy.update(snapshot, header.occluded_height()) {
            events.push(LookoutEvent::Nav(change));
        }

        for event in &events {
            trace.event(*event);
        }

        let mut outcome = TickOutcome {
            snapshot: *snapshot,
            header,
            active_nav: self.spy.active(),
            events,
        };
        self.subscribers.dispatch(snapshot, &mut outcome);
        outcome
    }

    /// Fires reveal activations due at `now_ms` between ticks.
    pub fn advance<T: LookoutTrace>(&mut self, now_ms: u64, mut trace: T) -> Vec<LookoutEvent> {
        self.scratch.clear();
        self.reveal.advance_into(now_ms, &mut self.scratch);
        self.scratch
            .drain(..)
            .map(|event| {
                let event = LookoutEvent::Reveal(event);
                trace.event(event);
                event
            })
            .collect()
    }

    /// When the host should call [`advance`](Self::advance) next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.reveal.next_deadline()
    }

    /// Marks cached layout as stale after DOM mutations that were not a resize.
    pub fn invalidate_layout(&mut self) {
        if let Some(header) = &mut self.header {
            header.invalidate();
        }
        for sticky in &mut self.sticky {
            sticky.invalidate();
        }
    }

    /// The active navigation link element.
    #[must_use]
    pub fn active_nav_link(&self) -> Option<&E> {
        self.spy.active_link()
    }

    /// Returns `true` while sticky region `index` is fixed to the viewport top.
    #[must_use]
    pub fn is_fixed(&self, index: usize) -> bool {
        self.sticky.get(index).is_some_and(StickyRegion::is_fixed)
    }

    /// Current fixed header state; [`HeaderState::NONE`] without a header.
    #[must_use]
    pub fn header_state(&self) -> HeaderState {
        self.header
            .as_ref()
            .map_or(HeaderState::NONE, FixedHeader::state)
    }

    /// The fixed header tracker, if the page has one.
    #[must_use]
    pub fn header(&self) -> Option<&FixedHeader<E>> {
        self.header.as_ref()
    }

    /// The reveal tracker.
    #[must_use]
    pub fn reveal(&self) -> &RevealTracker<E> {
        &self.reveal
    }

    /// Sticky regions in discovery order.
    #[must_use]
    pub fn sticky_regions(&self) -> &[StickyRegion<E>] {
        &self.sticky
    }

    /// The scroll spy.
    #[must_use]
    pub fn spy(&self) -> &ScrollSpy<E> {
        &self.spy
    }

    /// Snapshot of every tracker for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> LookoutDebugInfo {
        LookoutDebugInfo {
            header: self.header.as_ref().map(FixedHeader::state),
            reveal: self.reveal.debug_info(),
            sticky: self.sticky.iter().map(StickyRegion::debug_info).collect(),
            spy: self.spy.debug_info(),
            subscribers: self.subscribers.len(),
        }
    }
}

/// Debug snapshot of a [`Lookout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LookoutDebugInfo {
    /// Header state, if the page has a fixed header.
    pub header: Option<HeaderState>,
    /// Reveal tracker summary.
    pub reveal: RevealDebugInfo,
    /// One entry per sticky region.
    pub sticky: Vec<StickyDebugInfo>,
    /// Scroll spy summary.
    pub spy: SpyDebugInfo,
    /// Number of extra subscribers.
    pub subscribers: usize,
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use lookout_geometry::{Element, HeadlessElement, StyleProperty, TickOrigin, ViewportSnapshot};
    use lookout_reveal::{RevealOptions, RevealState};
    use lookout_sticky::StickyOptions;

    use super::Lookout;
    use crate::{EventRecorder, LookoutEvent};

    fn snap(scroll_top: f64, origin: TickOrigin) -> ViewportSnapshot {
        ViewportSnapshot::new(scroll_top, 800.0, 4000.0, origin)
    }

    #[test]
    fn header_runs_before_dependents() {
        let mut lookout = Lookout::default();
        let header = HeadlessElement::new(Rect::new(0.0, 0.0, 1200.0, 60.0));
        lookout.set_header(header.clone());
        let container = HeadlessElement::new(Rect::new(0.0, 400.0, 960.0, 2400.0));
        let sidebar = HeadlessElement::new(Rect::new(0.0, 400.0, 240.0, 700.0));
        lookout.add_sticky(sidebar.clone(), container, StickyOptions::default());

        lookout.tick_snapshot(&snap(0.0, TickOrigin::InitialLoad), 0, ());
        let mut trace = EventRecorder::new();
        let outcome = lookout.tick_snapshot(&snap(350.0, TickOrigin::Scroll), 16, &mut trace);

        // The region docks below the header fixed in this same tick.
        assert!(outcome.header.is_fixed);
        assert!(lookout.is_fixed(0));
        assert_eq!(sidebar.style(StyleProperty::Top), Some(60.0));
        assert!(matches!(
            trace.events.as_slice(),
            [
                LookoutEvent::Header { fixed: true },
                LookoutEvent::Sticky { region: 0, .. },
            ]
        ));
        assert_eq!(trace.ticks, 1);
    }

    #[test]
    fn advance_fires_pending_reveals() {
        let mut lookout = Lookout::default();
        let card = HeadlessElement::new(Rect::new(0.0, 100.0, 300.0, 300.0));
        let id = lookout.observe(card.clone(), RevealOptions::new().with_delay_ms(200));

        let outcome = lookout.tick_snapshot(&snap(0.0, TickOrigin::InitialLoad), 1000, ());
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(lookout.next_deadline(), Some(1200));
        assert!(lookout.advance(1199, ()).is_empty());

        let fired = lookout.advance(1200, ());
        assert_eq!(fired.len(), 1);
        assert_eq!(lookout.reveal().state(id), Some(RevealState::Triggered));
        assert!(card.has_class("revealed"));
        assert_eq!(lookout.next_deadline(), None);
    }

    #[test]
    fn subscribers_see_the_outcome() {
        let mut lookout: Lookout<HeadlessElement> = Lookout::default();
        lookout.subscribe(|snap, outcome| {
            assert_eq!(snap.scroll_top, outcome.snapshot.scroll_top);
            outcome.active_nav = Some(42);
        });
        let outcome = lookout.tick_snapshot(&snap(10.0, TickOrigin::Scroll), 0, ());
        assert_eq!(outcome.active_nav, Some(42));
        assert_eq!(lookout.debug_info().subscribers, 1);
        assert!(!lookout.is_fixed(3));
    }
}
