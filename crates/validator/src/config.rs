//! Validator configuration and the shallow merge with defaults.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::RuleSet;

// ============================================================================
// EVENT TYPE
// ============================================================================

/// Identifier carried by every failure event a validator dispatches.
///
/// Serializes as a bare string so it can be read from a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(Cow<'static, str>);

impl EventType {
    /// The event type used when a configuration does not name one.
    pub const VALIDATION_FAILED: Self = Self(Cow::Borrowed("VALIDATION_FAILED"));

    /// Creates an event type.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The event type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventType {
    fn default() -> Self {
        Self::VALIDATION_FAILED
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EventType {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// The merged configuration a [`Validator`](crate::Validator) owns.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Field name → ordered rules.
    pub rules: RuleSet,
    /// Type of the event dispatched when `is_valid` fails.
    pub failure_event_type: EventType,
}

impl ValidatorConfig {
    /// Applies `overrides` on top of `self`.
    ///
    /// The merge is shallow: a supplied rule set replaces the current one
    /// wholesale, it is never merged field by field.
    #[must_use]
    pub fn merge(self, overrides: ConfigOverrides) -> Self {
        Self {
            rules: overrides.rules.unwrap_or(self.rules),
            failure_event_type: overrides
                .failure_event_type
                .unwrap_or(self.failure_event_type),
        }
    }
}

/// A partial configuration; unset keys fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement rule set.
    pub rules: Option<RuleSet>,
    /// Replacement failure event type.
    pub failure_event_type: Option<EventType>,
}

impl ConfigOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule set.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Sets the failure event type.
    #[must_use = "builder methods must be chained or built"]
    pub fn failure_event_type(mut self, event_type: impl Into<EventType>) -> Self {
        self.failure_event_type = Some(event_type.into());
        self
    }
}

impl From<RuleSet> for ConfigOverrides {
    fn from(rules: RuleSet) -> Self {
        Self::new().rules(rules)
    }
}
