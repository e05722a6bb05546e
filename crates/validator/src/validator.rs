//! The validator factory and the [`Validator`] it produces.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::{ConfigOverrides, EventType, ValidatorConfig};
use crate::dispatch::{Dispatch, FailureEvent, TracingDispatcher};
use crate::error::{Result, ValidatorError};
use crate::report::ValidationErrors;
use crate::rule::{Message, Rule, RuleList, RuleSet};

// ============================================================================
// FACTORY
// ============================================================================

/// Builds a validator that reports failures through [`TracingDispatcher`].
///
/// `None` and empty overrides both yield the default configuration: no rules
/// and [`EventType::VALIDATION_FAILED`].
///
/// # Examples
///
/// ```
/// use fieldguard_validator::{ConfigOverrides, build, rule_set, rules};
/// use serde_json::json;
///
/// let validator = build(Some(ConfigOverrides::new().rules(rule_set! {
///     "text" => [rules::not_blank("Message can't be blank.")],
/// })));
///
/// assert!(validator.is_valid(&json!({ "text": "hello" }), None));
/// assert!(!validator.is_valid(&json!({ "text": "   " }), None));
/// ```
pub fn build(overrides: Option<ConfigOverrides>) -> Validator {
    build_with(overrides, TracingDispatcher)
}

/// Builds a validator that reports failures through `dispatcher`.
pub fn build_with<D>(overrides: Option<ConfigOverrides>, dispatcher: D) -> Validator
where
    D: Dispatch + 'static,
{
    let config = ValidatorConfig::default().merge(overrides.unwrap_or_default());
    Validator::from_parts(config, Arc::new(dispatcher))
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs per-field rules and reports failures.
///
/// A validator is immutable and keeps no state between calls: repeated calls
/// with the same input give the same answer. Every factory call creates a
/// separate instance.
pub struct Validator {
    config: ValidatorConfig,
    dispatcher: Arc<dyn Dispatch>,
}

impl Validator {
    /// Starts a fluent builder.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    fn from_parts(config: ValidatorConfig, dispatcher: Arc<dyn Dispatch>) -> Self {
        tracing::debug!(
            fields = config.rules.len(),
            event_type = %config.failure_event_type,
            "validator built"
        );
        Self { config, dispatcher }
    }

    /// Checks every configured field of `data`.
    ///
    /// Returns `true` when no field has errors. Otherwise dispatches exactly
    /// one [`FailureEvent`] carrying `options` and the failing fields, then
    /// returns `false`.
    ///
    /// Fields missing from `data` count as absent and are not checked. A
    /// `data` that is not a JSON object has no fields at all.
    pub fn is_valid(&self, data: &Value, options: Option<Value>) -> bool {
        let errors = self.collect_errors(data);
        if errors.is_empty() {
            return true;
        }

        self.dispatcher.dispatch(FailureEvent {
            event_type: self.config.failure_event_type.clone(),
            options,
            errors,
        });
        false
    }

    /// Serializes `record` to JSON and runs [`is_valid`](Self::is_valid) on it.
    ///
    /// `Option::None` struct fields serialize as `null`, which is a present
    /// value; use `#[serde(skip_serializing_if = "Option::is_none")]` to have
    /// them treated as absent.
    pub fn is_valid_record<T>(&self, record: &T, options: Option<Value>) -> Result<bool>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_value(record)?;
        Ok(self.is_valid(&data, options))
    }

    /// Runs the same pass as [`is_valid`](Self::is_valid) without dispatching.
    pub fn collect_errors(&self, data: &Value) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, rules) in &self.config.rules {
            let messages = Self::run(field, rules, data.get(field));
            errors.record(Cow::Owned(field.to_owned()), messages);
        }

        tracing::debug!(
            checked = self.config.rules.len(),
            failed = errors.len(),
            "validation pass complete"
        );
        errors
    }

    /// Returns the failure messages for one field.
    ///
    /// - `Err(UnregisteredField)` if `field` has no rule list.
    /// - `Ok(vec![])` if `value` is `None`; no rules run on absent values.
    /// - Otherwise every rule runs once, in order, and the messages of the
    ///   failing ones are returned in that order.
    pub fn field_errors(&self, field: &str, value: Option<&Value>) -> Result<Vec<Message>> {
        let rules = self
            .config
            .rules
            .get(field)
            .ok_or_else(|| ValidatorError::unregistered(field.to_owned()))?;
        Ok(Self::run(field, rules, value))
    }

    fn run(field: &str, rules: &RuleList, value: Option<&Value>) -> Vec<Message> {
        let Some(value) = value else {
            tracing::debug!(field, "value absent, rules skipped");
            return Vec::new();
        };

        let messages = rules.evaluate(value);
        for message in &messages {
            tracing::trace!(field, %message, "rule failed");
        }
        messages
    }

    /// Configured field names, in check order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.config.rules.fields()
    }

    /// Returns `true` if `field` has a rule list.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.config.rules.contains(field)
    }

    /// The event type used for failure events.
    #[must_use]
    pub fn failure_event_type(&self) -> &EventType {
        &self.config.failure_event_type
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.config.rules)
            .field("failure_event_type", &self.config.failure_event_type)
            .field("dispatcher", &"<dyn Dispatch>")
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent construction of a [`Validator`].
///
/// ```
/// use fieldguard_validator::{RecordingDispatcher, Validator, rules};
/// use serde_json::json;
///
/// let recorder = RecordingDispatcher::new();
/// let validator = Validator::builder()
///     .rule("sender_id", rules::numeric("ID must be a number."))
///     .rule("text", rules::not_blank("Message can't be blank."))
///     .rule("text", rules::max_length(250, "Your message must be 250 characters or shorter."))
///     .failure_event_type("MESSAGE_VALIDATION_FAILED")
///     .dispatcher(recorder.clone())
///     .build();
///
/// assert!(!validator.is_valid(&json!({ "sender_id": "abc", "text": "hi" }), None));
/// assert_eq!(recorder.len(), 1);
/// ```
pub struct ValidatorBuilder {
    overrides: ConfigOverrides,
    dispatcher: Arc<dyn Dispatch>,
}

impl ValidatorBuilder {
    /// Creates a builder with default configuration and [`TracingDispatcher`].
    pub fn new() -> Self {
        Self {
            overrides: ConfigOverrides::new(),
            dispatcher: Arc::new(TracingDispatcher),
        }
    }

    /// Replaces the whole rule set.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.overrides.rules = Some(rules);
        self
    }

    /// Registers (or replaces) the rule list for one field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: impl Into<Cow<'static, str>>, rules: RuleList) -> Self {
        self.overrides
            .rules
            .get_or_insert_with(RuleSet::new)
            .insert(field, rules);
        self
    }

    /// Appends one rule to a field's list, registering the field if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R>(mut self, field: impl Into<Cow<'static, str>>, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.overrides
            .rules
            .get_or_insert_with(RuleSet::new)
            .field_mut(field)
            .push(rule);
        self
    }

    /// Sets the failure event type.
    #[must_use = "builder methods must be chained or built"]
    pub fn failure_event_type(mut self, event_type: impl Into<EventType>) -> Self {
        self.overrides.failure_event_type = Some(event_type.into());
        self
    }

    /// Sets the dispatcher that receives failure events.
    #[must_use = "builder methods must be chained or built"]
    pub fn dispatcher<D>(mut self, dispatcher: D) -> Self
    where
        D: Dispatch + 'static,
    {
        self.dispatcher = Arc::new(dispatcher);
        self
    }

    /// Builds the validator.
    pub fn build(self) -> Validator {
        let config = ValidatorConfig::default().merge(self.overrides);
        Validator::from_parts(config, self.dispatcher)
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
