// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick fan-out to any number of subscribers.
//!
//! Each subscriber registers a handler once; [`TickDispatcher::dispatch`] hands
//! the same [`ViewportSnapshot`] and a shared mutable context to every handler,
//! in registration order. Registering a handler never replaces another one.
//!
//! ## Minimal example
//!
//! ```
//! use lookout::TickDispatcher;
//! use lookout::geometry::{TickOrigin, ViewportSnapshot};
//!
//! let mut dispatcher: TickDispatcher<Vec<&'static str>> = TickDispatcher::new();
//! dispatcher.subscribe(|_, log| log.push("parallax"));
//! let progress = dispatcher.subscribe(|snap, log| {
//!     if snap.is_at_bottom() {
//!         log.push("progress: done");
//!     }
//! });
//!
//! let mut log = Vec::new();
//! let snap = ViewportSnapshot::new(1200.0, 800.0, 2000.0, TickOrigin::Scroll);
//! dispatcher.dispatch(&snap, &mut log);
//! assert_eq!(log, ["parallax", "progress: done"]);
//!
//! assert!(dispatcher.unsubscribe(progress));
//! assert_eq!(dispatcher.len(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use lookout_geometry::ViewportSnapshot;

type Handler<C> = Box<dyn FnMut(&ViewportSnapshot, &mut C)>;

/// Handle returned by [`TickDispatcher::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

/// Ordered set of tick handlers sharing a context of type `C`.
pub struct TickDispatcher<C> {
    handlers: Vec<(SubscriberId, Handler<C>)>,
    next_id: u64,
}

impl<C> Default for TickDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TickDispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickDispatcher")
            .field("subscribers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl<C> TickDispatcher<C> {
    /// Creates a dispatcher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` after all existing subscribers.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&ViewportSnapshot, &mut C) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let Some(pos) = self.handlers.iter().position(|(h, _)| *h == id) else {
            return false;
        };
        drop(self.handlers.remove(pos));
        true
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes every handler with `snapshot` and `context`, in registration order.
    pub fn dispatch(&mut self, snapshot: &ViewportSnapshot, context: &mut C) {
        for (_, handler) in &mut self.handlers {
            handler(snapshot, context);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    use lookout_geometry::{TickOrigin, ViewportSnapshot};

    use super::TickDispatcher;

    #[test]
    fn handlers_run_in_registration_order() {
        let mut dispatcher: TickDispatcher<Vec<u32>> = TickDispatcher::new();
        for n in 0..4 {
            dispatcher.subscribe(move |_, out| out.push(n));
        }
        let mut out = Vec::new();
        let snap = ViewportSnapshot::new(0.0, 800.0, 2000.0, TickOrigin::InitialLoad);
        dispatcher.dispatch(&snap, &mut out);
        dispatcher.dispatch(&snap, &mut out);
        assert_eq!(out, [0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn unsubscribe_keeps_the_rest_in_order() {
        let mut dispatcher: TickDispatcher<Vec<u32>> = TickDispatcher::new();
        let a = dispatcher.subscribe(|_, out| out.push(1));
        let b = dispatcher.subscribe(|_, out| out.push(2));
        dispatcher.subscribe(|_, out| out.push(3));

        assert!(dispatcher.unsubscribe(b));
        assert!(!dispatcher.unsubscribe(b));
        assert_ne!(a, b);

        let mut out = Vec::new();
        let snap = ViewportSnapshot::new(0.0, 800.0, 2000.0, TickOrigin::Scroll);
        dispatcher.dispatch(&snap, &mut out);
        assert_eq!(out, [1, 3]);
        assert_eq!(dispatcher.len(), 2);
    }

    #[test]
    fn unsubscribe_releases_the_handler() {
        let mut dispatcher: TickDispatcher<Vec<usize>> = TickDispatcher::new();
        let shared = Rc::new(7_usize);
        let captured = Rc::clone(&shared);
        let id = dispatcher.subscribe(move |_, out| out.push(*captured));
        assert_eq!(Rc::strong_count(&shared), 2);

        assert!(dispatcher.unsubscribe(id));
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn handlers_see_the_same_snapshot() {
        let mut dispatcher: TickDispatcher<Vec<f64>> = TickDispatcher::new();
        dispatcher.subscribe(|snap, out| out.push(snap.scroll_top));
        dispatcher.subscribe(|snap, out| out.push(snap.visible_bottom()));
        let mut out = Vec::new();
        dispatcher.dispatch(
            &ViewportSnapshot::new(250.0, 800.0, 2000.0, TickOrigin::Scroll),
            &mut out,
        );
        assert_eq!(out, [250.0, 1050.0]);
        assert!(!dispatcher.is_empty());
    }
}
