//! Rules and rule collections.
//!
//! A [`Rule`] looks at a single field value and returns an [`Outcome`].
//! Rules are grouped per field in a [`RuleList`], and a [`RuleSet`] maps
//! field names to their lists in insertion order.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// An error message produced by a failing rule.
///
/// `Cow<'static, str>` keeps the common case of static messages
/// allocation-free.
pub type Message = Cow<'static, str>;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of running one rule against one value.
///
/// There is no third state: a rule either passes or fails with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome carries the failure message, if any"]
pub enum Outcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule; the message is reported to the caller.
    Fail(Message),
}

impl Outcome {
    /// Creates a failing outcome.
    pub fn fail(message: impl Into<Message>) -> Self {
        Self::Fail(message.into())
    }

    /// Passes when `ok` holds, fails with `message` otherwise.
    pub fn check(ok: bool, message: impl Into<Message>) -> Self {
        if ok { Self::Pass } else { Self::fail(message) }
    }

    /// Returns `true` for [`Outcome::Pass`].
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }

    /// Consumes the outcome, returning the failure message if any.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }
}

impl<E> From<Result<(), E>> for Outcome
where
    E: Into<Message>,
{
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Pass,
            Err(message) => Self::fail(message),
        }
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A predicate over a single field value.
///
/// Rules are expected to be pure. Any `Fn(&Value) -> Outcome` closure or
/// function item is a rule:
///
/// ```
/// use fieldguard_validator::{Outcome, Rule};
/// use serde_json::{Value, json};
///
/// fn is_one(value: &Value) -> Outcome {
///     Outcome::check(value == &json!(1), "Data must be one.")
/// }
///
/// assert!(is_one.check(&json!(1)).is_pass());
/// assert_eq!(is_one.check(&json!(2)).message(), Some("Data must be one."));
/// ```
///
/// A panic inside a rule is not caught; it unwinds through the validator
/// call that invoked it.
pub trait Rule: Send + Sync {
    /// Evaluates the rule against `value`.
    fn check(&self, value: &Value) -> Outcome;
}

impl<F> Rule for F
where
    F: Fn(&Value) -> Outcome + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Outcome {
        self(value)
    }
}

/// Pins a closure to the [`Rule`] signature.
///
/// Closures passed straight to a generic `R: Rule` parameter need an explicit
/// `&Value` annotation to be inferred as higher-ranked; this helper does it
/// for them.
pub fn rule_fn<F>(f: F) -> F
where
    F: Fn(&Value) -> Outcome + Send + Sync,
{
    f
}

// ============================================================================
// RULE LIST
// ============================================================================

/// The ordered rules for one field.
///
/// Cloning is cheap: rules are reference counted, so the same rule list can
/// back several validators.
#[derive(Clone, Default)]
pub struct RuleList {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleList {
    /// Creates an empty rule list.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule, builder style.
    pub fn with<R>(mut self, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.push(rule);
        self
    }

    /// Appends a rule.
    pub fn push<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the list holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in order.
    pub fn iter(&self) -> RulesIter<'_> {
        RulesIter {
            inner: self.rules.iter(),
        }
    }

    /// Runs every rule once, in order, and returns the failure messages in
    /// the same order.
    pub fn evaluate(&self, value: &Value) -> Vec<Message> {
        self.iter()
            .filter_map(|rule| rule.check(value).into_message())
            .collect()
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a dyn Rule;
    type IntoIter = RulesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rules of a [`RuleList`].
#[derive(Clone)]
pub struct RulesIter<'a> {
    inner: std::slice::Iter<'a, Arc<dyn Rule>>,
}

impl<'a> Iterator for RulesIter<'a> {
    type Item = &'a dyn Rule;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|rule| &**rule)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RulesIter<'_> {}

impl fmt::Debug for RuleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleList")
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Field name → rule list, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: IndexMap<Cow<'static, str>, RuleList>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Registers `rules` for `field`, builder style.
    ///
    /// Registering the same field twice replaces the earlier list but keeps
    /// its original position.
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>, rules: RuleList) -> Self {
        self.insert(field, rules);
        self
    }

    /// Registers `rules` for `field`, returning the list it replaced.
    pub fn insert(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        rules: RuleList,
    ) -> Option<RuleList> {
        self.fields.insert(field.into(), rules)
    }

    /// Returns the rule list for `field`, creating an empty one if needed.
    pub fn field_mut(&mut self, field: impl Into<Cow<'static, str>>) -> &mut RuleList {
        self.fields.entry(field.into()).or_default()
    }

    /// Looks up the rule list for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RuleList> {
        self.fields.get(field)
    }

    /// Returns `true` if `field` has a rule list (even an empty one).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in iteration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| &**k)
    }

    /// `(field, rules)` pairs in iteration order.
    pub fn iter(&self) -> FieldRulesIter<'_> {
        FieldRulesIter {
            inner: self.fields.iter(),
        }
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a str, &'a RuleList);
    type IntoIter = FieldRulesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(field, rules)` pairs of a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct FieldRulesIter<'a> {
    inner: indexmap::map::Iter<'a, Cow<'static, str>, RuleList>,
}

impl<'a> Iterator for FieldRulesIter<'a> {
    type Item = (&'a str, &'a RuleList);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(field, rules)| (&**field, rules))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldRulesIter<'_> {}

impl<K> FromIterator<(K, RuleList)> for RuleSet
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, RuleList)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
