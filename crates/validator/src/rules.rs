//! Stock rule constructors.
//!
//! Each constructor takes the failure message up front and returns a
//! clonable [`Rule`]. A value of the wrong JSON type fails with that same
//! message. Lengths are measured in Unicode scalar values.
//!
//! ```
//! use fieldguard_validator::{Rule, rules};
//! use serde_json::json;
//!
//! let rule = rules::max_length(5, "Too long.");
//! assert!(rule.check(&json!("hello")).is_pass());
//! assert_eq!(rule.check(&json!("hello!")).message(), Some("Too long."));
//! ```

use serde_json::Value;

use crate::rule::{Message, Outcome, Rule, rule_fn};

/// Fails unless the value is a string with at least one non-whitespace char.
pub fn not_blank(message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| {
        let ok = value.as_str().is_some_and(|s| !s.trim().is_empty());
        Outcome::check(ok, message.clone())
    })
}

/// Fails unless the value is a string of at least `min` characters.
pub fn min_length(min: usize, message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| {
        let ok = value.as_str().is_some_and(|s| s.chars().count() >= min);
        Outcome::check(ok, message.clone())
    })
}

/// Fails unless the value is a string of at most `max` characters.
pub fn max_length(max: usize, message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| {
        let ok = value.as_str().is_some_and(|s| s.chars().count() <= max);
        Outcome::check(ok, message.clone())
    })
}

/// Fails unless the value is a JSON number or a string holding a finite
/// number (surrounding whitespace allowed, empty strings rejected).
pub fn numeric(message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| {
        let ok = match value {
            Value::Number(_) => true,
            Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
            _ => false,
        };
        Outcome::check(ok, message.clone())
    })
}

/// Fails unless the value equals `expected`.
pub fn equals(expected: Value, message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| Outcome::check(value == &expected, message.clone()))
}

/// Fails unless the value is a number greater than or equal to `min`.
pub fn at_least(min: f64, message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| {
        let ok = value.as_f64().is_some_and(|n| n >= min);
        Outcome::check(ok, message.clone())
    })
}

/// Fails unless the value equals one of `allowed`.
pub fn one_of(allowed: Vec<Value>, message: impl Into<Message>) -> impl Rule + Clone {
    let message = message.into();
    rule_fn(move |value| Outcome::check(allowed.contains(value), message.clone()))
}

/// Wraps a boolean predicate: `true` passes, `false` fails with `message`.
pub fn custom<P>(predicate: P, message: impl Into<Message>) -> impl Rule + Clone
where
    P: Fn(&Value) -> bool + Clone + Send + Sync,
{
    let message = message.into();
    rule_fn(move |value| Outcome::check(predicate(value), message.clone()))
}
