// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-driven configuration.
//!
//! Any element opts into tracking by carrying a marker attribute, and tunes
//! its behavior with a few optional attributes. With the default
//! [`AttributeNames`]:
//!
//! | Attribute | On | Meaning |
//! |---|---|---|
//! | `data-reveal` | any element | observe for reveal-on-scroll |
//! | `data-reveal-delay` | reveal element | activation delay in milliseconds |
//! | `data-reveal-repeat` | reveal element | `once` (default) or `repeat`; empty means `repeat` |
//! | `data-reveal-class` | reveal element | space-separated trigger classes |
//! | `data-reveal-partial` | reveal element | also trigger when half visible on load |
//! | `data-sticky` | sticky element | container id, or empty for the parent |
//! | `data-sticky-offset` | sticky element | `header` (default), `none`, or pixels |
//! | `data-sticky-constrain` | sticky element | limit `max-height` while fixed |
//! | `data-spy` | navigation link | highlight from the `href` fragment's target |
//! | `data-fixed-header` | header element | the page's fixed navigation header |

use alloc::string::{String, ToString};

use lookout_geometry::Element;
use lookout_reveal::{PendingPolicy, RepeatPolicy, RevealOptions};
use lookout_sticky::{HeaderOffset, StickyOptions};

use crate::{ConfigError, ConfigErrorKind};

/// Names of the attributes read during discovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeNames {
    /// Marks an element for reveal tracking.
    pub reveal: String,
    /// Reveal activation delay.
    pub reveal_delay: String,
    /// Reveal repeat policy.
    pub reveal_repeat: String,
    /// Reveal trigger classes.
    pub reveal_class: String,
    /// Reveal partial activation on load.
    pub reveal_partial: String,
    /// Marks a sticky element; the value names its container.
    pub sticky: String,
    /// Sticky header offset.
    pub sticky_offset: String,
    /// Sticky `max-height` constraint.
    pub sticky_constrain: String,
    /// Marks a navigation link.
    pub spy: String,
    /// Where a navigation link names its target.
    pub spy_href: String,
    /// Marks the fixed navigation header.
    pub fixed_header: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            reveal: "data-reveal".to_string(),
            reveal_delay: "data-reveal-delay".to_string(),
            reveal_repeat: "data-reveal-repeat".to_string(),
            reveal_class: "data-reveal-class".to_string(),
            reveal_partial: "data-reveal-partial".to_string(),
            sticky: "data-sticky".to_string(),
            sticky_offset: "data-sticky-offset".to_string(),
            sticky_constrain: "data-sticky-constrain".to_string(),
            spy: "data-spy".to_string(),
            spy_href: "href".to_string(),
            fixed_header: "data-fixed-header".to_string(),
        }
    }
}

/// Configuration of a [`Lookout`](crate::Lookout).
#[derive(Clone, Debug, PartialEq)]
pub struct LookoutConfig {
    /// Attribute names read during discovery.
    pub attributes: AttributeNames,
    /// Marker class added to every triggered reveal element.
    pub reveal_marker_class: String,
    /// Options used for reveal elements without (valid) attributes.
    pub reveal_defaults: RevealOptions,
    /// Pending activation policy of the reveal tracker.
    pub pending_policy: PendingPolicy,
    /// Options used for sticky elements without (valid) attributes.
    pub sticky_defaults: StickyOptions,
    /// Class added to the active navigation link.
    pub active_class: String,
    /// Class toggled on the fixed header while fixed.
    pub header_fixed_class: String,
}

impl Default for LookoutConfig {
    fn default() -> Self {
        Self {
            attributes: AttributeNames::default(),
            reveal_marker_class: lookout_reveal::DEFAULT_MARKER_CLASS.to_string(),
            reveal_defaults: RevealOptions::default(),
            pending_policy: PendingPolicy::default(),
            sticky_defaults: StickyOptions::default(),
            active_class: lookout_spy::DEFAULT_ACTIVE_CLASS.to_string(),
            header_fixed_class: lookout_sticky::DEFAULT_HEADER_FIXED_CLASS.to_string(),
        }
    }
}

impl LookoutConfig {
    /// Reads an element's reveal options, starting from [`reveal_defaults`](Self::reveal_defaults).
    ///
    /// Returns the first malformed attribute as an error.
    pub fn reveal_options<E: Element>(&self, element: &E) -> Result<RevealOptions, ConfigError> {
        let names = &self.attributes;
        let mut options = self.reveal_defaults.clone();

        if let Some(value) = element.attribute(&names.reveal_delay) {
            options.delay_ms = value.trim().parse::<u32>().map_err(|_| {
                ConfigError::new(&names.reveal_delay, &value, ConfigErrorKind::InvalidDelay)
            })?;
        }
        if let Some(value) = element.attribute(&names.reveal_repeat) {
            options.repeat = match value.trim() {
                "" | "repeat" | "true" => RepeatPolicy::Repeat,
                "once" | "false" => RepeatPolicy::Once,
                _ => {
                    return Err(ConfigError::new(
                        &names.reveal_repeat,
                        &value,
                        ConfigErrorKind::InvalidRepeat,
                    ));
                }
            };
        }
        if let Some(value) = element.attribute(&names.reveal_class) {
            for class in value.split_ascii_whitespace() {
                options = options.with_class(class);
            }
        }
        if let Some(value) = element.attribute(&names.reveal_partial) {
            options.partial = parse_flag(&names.reveal_partial, &value)?;
        }
        Ok(options)
    }

    /// Reads an element's sticky options, starting from [`sticky_defaults`](Self::sticky_defaults).
    ///
    /// Returns the first malformed attribute as an error.
    pub fn sticky_options<E: Element>(&self, element: &E) -> Result<StickyOptions, ConfigError> {
        let names = &self.attributes;
        let mut options = self.sticky_defaults.clone();

        if let Some(value) = element.attribute(&names.sticky_offset) {
            options.header_offset = match value.trim() {
                "" | "header" => HeaderOffset::FromHeader,
                "none" => HeaderOffset::None,
                px => match px.trim_end_matches("px").parse::<f64>() {
                    Ok(px) if px.is_finite() && px >= 0.0 => HeaderOffset::Pixels(px),
                    _ => {
                        return Err(ConfigError::new(
                            &names.sticky_offset,
                            &value,
                            ConfigErrorKind::InvalidOffset,
                        ));
                    }
                },
            };
        }
        if let Some(value) = element.attribute(&names.sticky_constrain) {
            options.constrain_height = parse_flag(&names.sticky_constrain, &value)?;
        }
        Ok(options)
    }
}

/// Extracts the element id from an `href` such as `#pricing` or `/page#pricing`.
pub(crate) fn fragment(href: &str) -> Option<&str> {
    let (_, id) = href.split_once('#')?;
    (!id.is_empty()).then_some(id)
}

fn parse_flag(attribute: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::new(
            attribute,
            value,
            ConfigErrorKind::InvalidFlag,
        )),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use lookout_geometry::HeadlessElement;
    use lookout_reveal::RepeatPolicy;
    use lookout_sticky::HeaderOffset;

    use super::{LookoutConfig, fragment};
    use crate::ConfigErrorKind;

    fn el() -> HeadlessElement {
        HeadlessElement::new(Rect::ZERO).with_attribute("data-reveal", "")
    }

    #[test]
    fn reveal_attributes_are_parsed() {
        let config = LookoutConfig::default();
        let opts = config
            .reveal_options(
                &el()
                    .with_attribute("data-reveal-delay", " 250 ")
                    .with_attribute("data-reveal-repeat", "")
                    .with_attribute("data-reveal-class", "fade-in  slide-up")
                    .with_attribute("data-reveal-partial", "true"),
            )
            .unwrap();
        assert_eq!(opts.delay_ms, 250);
        assert_eq!(opts.repeat, RepeatPolicy::Repeat);
        assert_eq!(opts.classes.as_slice(), ["fade-in", "slide-up"]);
        assert!(opts.partial);
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let mut config = LookoutConfig::default();
        config.reveal_defaults.delay_ms = 100;
        let opts = config.reveal_options(&el()).unwrap();
        assert_eq!(opts.delay_ms, 100);
        assert_eq!(opts.repeat, RepeatPolicy::Once);
        assert!(opts.classes.is_empty());
        assert!(!opts.partial);
    }

    #[test]
    fn malformed_reveal_attributes_are_rejected() {
        let config = LookoutConfig::default();

        let err = config
            .reveal_options(&el().with_attribute("data-reveal-delay", "-5"))
            .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidDelay);
        assert_eq!(err.value, "-5");

        let err = config
            .reveal_options(&el().with_attribute("data-reveal-repeat", "sometimes"))
            .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidRepeat);

        let err = config
            .reveal_options(&el().with_attribute("data-reveal-partial", "yes"))
            .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidFlag);
        assert_eq!(err.attribute, "data-reveal-partial");
    }

    #[test]
    fn sticky_offsets() {
        let config = LookoutConfig::default();
        let offset = |value: &str| {
            config
                .sticky_options(&el().with_attribute("data-sticky-offset", value))
                .map(|o| o.header_offset)
        };
        assert_eq!(offset("header"), Ok(HeaderOffset::FromHeader));
        assert_eq!(offset("none"), Ok(HeaderOffset::None));
        assert_eq!(offset("72"), Ok(HeaderOffset::Pixels(72.0)));
        assert_eq!(offset("72px"), Ok(HeaderOffset::Pixels(72.0)));
        assert_eq!(
            offset("-3").map_err(|e| e.kind),
            Err(ConfigErrorKind::InvalidOffset)
        );

        let opts = config
            .sticky_options(&el().with_attribute("data-sticky-constrain", ""))
            .unwrap();
        assert!(opts.constrain_height);
    }

    #[test]
    fn href_fragments() {
        assert_eq!(fragment("#pricing"), Some("pricing"));
        assert_eq!(fragment("/tour#faq"), Some("faq"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("/about"), None);
    }
}
