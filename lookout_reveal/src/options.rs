// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use smallvec::SmallVec;

/// Whether a triggered element can be reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RepeatPolicy {
    /// Once triggered, never reset.
    #[default]
    Once,
    /// Reset whenever the element leaves the view, and trigger again on re-entry.
    Repeat,
}

/// What happens to a pending activation when its element leaves the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PendingPolicy {
    /// The activation fires at its deadline regardless of where the element is.
    #[default]
    FireAndForget,
    /// The activation is cancelled if the element is out of view on any tick
    /// before its deadline.
    CancelOnLeave,
}

/// Per-element configuration for a [`RevealTracker`](crate::RevealTracker).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealOptions {
    /// Classes added on trigger and removed on reset, in addition to the
    /// tracker's marker class.
    pub classes: SmallVec<[String; 2]>,
    /// Whether the element can be reset after triggering.
    pub repeat: RepeatPolicy,
    /// Delay between the geometric condition being met and the trigger.
    pub delay_ms: u32,
    /// On the initial-load tick, also trigger when about half visible.
    pub partial: bool,
}

impl RevealOptions {
    /// Options with no extra classes, [`RepeatPolicy::Once`], no delay, and
    /// partial activation disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trigger class.
    #[must_use]
    pub fn with_class(mut self, name: &str) -> Self {
        if !self.classes.iter().any(|c| c == name) {
            self.classes.push(name.to_string());
        }
        self
    }

    /// Sets the repeat policy.
    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the activation delay.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Enables or disables partial activation on the initial-load tick.
    #[must_use]
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }
}
