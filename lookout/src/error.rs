// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute configuration errors.

use alloc::string::String;
use core::fmt;

/// Why an element's configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// A delay that is not a non-negative integer number of milliseconds.
    InvalidDelay,
    /// A boolean flag that is neither empty, `true`, nor `false`.
    InvalidFlag,
    /// A repeat policy that is neither `once` nor `repeat`.
    InvalidRepeat,
    /// A header offset that is neither `header`, `none`, nor a non-negative number.
    InvalidOffset,
    /// A sticky element whose container could not be found.
    UnresolvedContainer,
    /// A navigation link whose `href` fragment does not name an element.
    UnresolvedTarget,
}

impl ConfigErrorKind {
    fn expected(self) -> &'static str {
        match self {
            Self::InvalidDelay => "a non-negative integer number of milliseconds",
            Self::InvalidFlag => "an empty value, `true`, or `false`",
            Self::InvalidRepeat => "`once` or `repeat`",
            Self::InvalidOffset => "`header`, `none`, or a non-negative number of pixels",
            Self::UnresolvedContainer => "the id of a container element",
            Self::UnresolvedTarget => "a `#fragment` naming an element",
        }
    }
}

/// Error returned when an element's configuration attributes are malformed.
///
/// Discovery never fails because of one: the element falls back to the
/// configured defaults (or is skipped, for unresolved references) and the error
/// is reported through [`LookoutTrace::rejected`](crate::LookoutTrace::rejected).
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The offending attribute.
    pub attribute: String,
    /// The attribute's value as found on the element.
    pub value: String,
    /// What was wrong with it.
    pub kind: ConfigErrorKind,
}

impl ConfigError {
    pub(crate) fn new(attribute: &str, value: &str, kind: ConfigErrorKind) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
            kind,
        }
    }
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConfigError {{ attribute: {:?}, value: {:?}, kind: {:?} }}",
            self.attribute, self.value, self.kind
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value {:?} for `{}`: expected {}",
            self.value,
            self.attribute,
            self.kind.expected()
        )
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ConfigError, ConfigErrorKind};

    #[test]
    fn display_names_attribute_and_expectation() {
        let err = ConfigError::new("data-reveal-delay", "soon", ConfigErrorKind::InvalidDelay);
        assert_eq!(
            err.to_string(),
            "invalid value \"soon\" for `data-reveal-delay`: expected a non-negative integer number of milliseconds"
        );
    }
}
