// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use lookout_geometry::{Element, ViewportSnapshot, classify};

use crate::{PendingPolicy, RepeatPolicy, RevealOptions};

/// Marker class added to every triggered element unless overridden.
pub const DEFAULT_MARKER_CLASS: &str = "revealed";

/// Stable handle to an element observed by a [`RevealTracker`].
///
/// Ids are assigned in registration order and are never reused; elements are
/// never removed from a tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealId(u32);

impl RevealId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Registration beyond u32::MAX elements is not supported"
    )]
    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the element in registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Tracked state of one observed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// Not triggered and no activation scheduled.
    Untriggered,
    /// Geometric condition met; the trigger fires at `due_ms`.
    Pending {
        /// Host clock value at which the activation fires.
        due_ms: u64,
    },
    /// Triggered: classes applied.
    Triggered,
}

/// A state transition produced by [`RevealTracker::tick`] or [`RevealTracker::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    /// An activation was scheduled for a later deadline.
    Scheduled {
        /// The element.
        id: RevealId,
        /// Host clock value at which it fires.
        due_ms: u64,
    },
    /// The element became triggered and its classes were added.
    Triggered(RevealId),
    /// The element was reset and its classes were removed.
    Reset(RevealId),
    /// A pending activation was dropped under [`PendingPolicy::CancelOnLeave`].
    Cancelled(RevealId),
}

impl RevealEvent {
    /// The element this event is about.
    #[must_use]
    pub fn id(&self) -> RevealId {
        match *self {
            Self::Scheduled { id, .. } => id,
            Self::Triggered(id) | Self::Reset(id) | Self::Cancelled(id) => id,
        }
    }
}

#[derive(Clone, Debug)]
struct Observed<E> {
    element: E,
    options: RevealOptions,
    state: RevealState,
}

/// Threshold tracker for reveal-on-scroll elements.
///
/// See the [crate documentation](crate) for the transition rules.
#[derive(Clone, Debug)]
pub struct RevealTracker<E> {
    observed: Vec<Observed<E>>,
    marker_class: String,
    pending_policy: PendingPolicy,
}

impl<E: Element> Default for RevealTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> RevealTracker<E> {
    /// Creates an empty tracker using [`DEFAULT_MARKER_CLASS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker_class(DEFAULT_MARKER_CLASS)
    }

    /// Creates an empty tracker with a custom marker class.
    #[must_use]
    pub fn with_marker_class(marker_class: &str) -> Self {
        Self {
            observed: Vec::new(),
            marker_class: marker_class.to_string(),
            pending_policy: PendingPolicy::default(),
        }
    }

    /// Returns the marker class added to triggered elements.
    #[must_use]
    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    /// Sets what happens to pending activations of elements that leave the view.
    pub fn set_pending_policy(&mut self, policy: PendingPolicy) {
        self.pending_policy = policy;
    }

    /// Returns the pending policy.
    #[must_use]
    pub fn pending_policy(&self) -> PendingPolicy {
        self.pending_policy
    }

    /// Starts observing `element`.
    ///
    /// The element is untriggered until the next tick evaluates it.
    pub fn observe(&mut self, element: E, options: RevealOptions) -> RevealId {
        let id = RevealId::from_index(self.observed.len());
        self.observed.push(Observed {
            element,
            options,
            state: RevealState::Untriggered,
        });
        id
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Returns the observed element.
    #[must_use]
    pub fn element(&self, id: RevealId) -> Option<&E> {
        self.observed.get(id.index()).map(|o| &o.element)
    }

    /// Returns the element's options.
    #[must_use]
    pub fn options(&self, id: RevealId) -> Option<&RevealOptions> {
        self.observed.get(id.index()).map(|o| &o.options)
    }

    /// Returns the element's current state.
    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.observed.get(id.index()).map(|o| o.state)
    }

    /// Returns `true` if the element is currently triggered.
    #[must_use]
    pub fn has_triggered(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Triggered)
    }

    /// Returns the ids of all observed elements in registration order.
    pub fn ids(&self) -> impl Iterator<Item = RevealId> + '_ {
        (0..self.observed.len()).map(RevealId::from_index)
    }

    /// Earliest deadline among pending activations.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.observed
            .iter()
            .filter_map(|o| match o.state {
                RevealState::Pending { due_ms } => Some(due_ms),
                _ => None,
            })
            .min()
    }

    /// Evaluates every observed element against `snapshot`.
    ///
    /// Pending activations due at `now_ms` fire first. Returns the transitions
    /// in registration order.
    pub fn tick(&mut self, snapshot: &ViewportSnapshot, now_ms: u64) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        self.tick_into(snapshot, now_ms, &mut events);
        events
    }

    /// Like [`tick`](Self::tick), appending transitions to `events`.
    pub fn tick_into(
        &mut self,
        snapshot: &ViewportSnapshot,
        now_ms: u64,
        events: &mut Vec<RevealEvent>,
    ) {
        self.advance_into(now_ms, events);

        for (index, observed) in self.observed.iter_mut().enumerate() {
            let id = RevealId::from_index(index);
            let vis = classify(observed.element.bounding_box(), snapshot);

            if vis.is_taller_than_viewport() {
                // Re-applied every tick; only the transition is reported.
                apply(
                    &observed.element,
                    &observed.options,
                    &self.marker_class,
                    true,
                );
                if observed.state != RevealState::Triggered {
                    observed.state = RevealState::Triggered;
                    events.push(RevealEvent::Triggered(id));
                }
                continue;
            }

            match observed.state {
                RevealState::Untriggered => {
                    let partial = snapshot.is_initial_load()
                        && observed.options.partial
                        && vis.is_partially_in_view();
                    if !(vis.is_fully_in_view() || partial) {
                        continue;
                    }
                    if observed.options.delay_ms == 0 {
                        apply(
                            &observed.element,
                            &observed.options,
                            &self.marker_class,
                            true,
                        );
                        observed.state = RevealState::Triggered;
                        events.push(RevealEvent::Triggered(id));
                    } else {
                        let due_ms = now_ms.saturating_add(u64::from(observed.options.delay_ms));
                        observed.state = RevealState::Pending { due_ms };
                        events.push(RevealEvent::Scheduled { id, due_ms });
                    }
                }
                RevealState::Pending { .. } => {
                    if self.pending_policy == PendingPolicy::CancelOnLeave && vis.is_out_of_view()
                    {
                        observed.state = RevealState::Untriggered;
                        events.push(RevealEvent::Cancelled(id));
                    }
                }
                RevealState::Triggered => {
                    if observed.options.repeat == RepeatPolicy::Repeat && vis.is_out_of_view() {
                        apply(
                            &observed.element,
                            &observed.options,
                            &self.marker_class,
                            false,
                        );
                        observed.state = RevealState::Untriggered;
                        events.push(RevealEvent::Reset(id));
                    }
                }
            }
        }
    }

    /// Fires every pending activation whose deadline is at or before `now_ms`.
    ///
    /// Activations fire without re-checking geometry.
    pub fn advance(&mut self, now_ms: u64) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        self.advance_into(now_ms, &mut events);
        events
    }

    /// Like [`advance`](Self::advance), appending transitions to `events`.
    pub fn advance_into(&mut self, now_ms: u64, events: &mut Vec<RevealEvent>) {
        for (index, observed) in self.observed.iter_mut().enumerate() {
            if let RevealState::Pending { due_ms } = observed.state
                && due_ms <= now_ms
            {
                apply(
                    &observed.element,
                    &observed.options,
                    &self.marker_class,
                    true,
                );
                observed.state = RevealState::Triggered;
                events.push(RevealEvent::Triggered(RevealId::from_index(index)));
            }
        }
    }

    /// Snapshot of the tracker state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> RevealDebugInfo {
        let mut info = RevealDebugInfo {
            observed: self.observed.len(),
            untriggered: 0,
            pending: 0,
            triggered: 0,
            next_deadline: self.next_deadline(),
            pending_policy: self.pending_policy,
        };
        for o in &self.observed {
            match o.state {
                RevealState::Untriggered => info.untriggered += 1,
                RevealState::Pending { .. } => info.pending += 1,
                RevealState::Triggered => info.triggered += 1,
            }
        }
        info
    }
}

fn apply<E: Element>(element: &E, options: &RevealOptions, marker_class: &str, on: bool) {
    for class in &options.classes {
        element.toggle_class(class, on);
    }
    element.toggle_class(marker_class, on);
}

/// Debug snapshot of a [`RevealTracker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealDebugInfo {
    /// Number of observed elements.
    pub observed: usize,
    /// Elements neither pending nor triggered.
    pub untriggered: usize,
    /// Elements waiting for their activation deadline.
    pub pending: usize,
    /// Triggered elements.
    pub triggered: usize,
    /// Earliest pending deadline.
    pub next_deadline: Option<u64>,
    /// Current pending policy.
    pub pending_policy: PendingPolicy,
}
