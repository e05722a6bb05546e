//! # fieldguard-validator
//!
//! A small factory for field-level data validators.
//!
//! Give it a mapping from field name to an ordered list of rules and it
//! returns a [`Validator`] with two operations:
//!
//! - [`Validator::is_valid`] checks every configured field and, on failure,
//!   dispatches one [`FailureEvent`] through an injected [`Dispatch`] port;
//! - [`Validator::field_errors`] checks one field and returns its messages.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::{Value, json};
//!
//! fn is_one(v: &Value) -> Outcome {
//!     Outcome::check(v == &json!(1), "Data must be one.")
//! }
//!
//! let recorder = RecordingDispatcher::new();
//! let validator = build_with(
//!     Some(ConfigOverrides::new().rules(rule_set! { "one" => [is_one] })),
//!     recorder.clone(),
//! );
//!
//! assert!(validator.is_valid(&json!({ "one": 1 }), None));
//! assert!(!validator.is_valid(&json!({ "one": 2 }), None));
//! assert_eq!(recorder.len(), 1);
//!
//! // Absent values are never checked.
//! assert!(validator.field_errors("one", None).unwrap().is_empty());
//! ```
//!
//! ## What it is not
//!
//! There are no nested objects, async rules, cross-field rules or
//! "required" semantics. A field missing from the data is skipped.

mod macros;

pub mod config;
pub mod dispatch;
pub mod error;
pub mod prelude;
pub mod report;
pub mod rule;
pub mod rules;
pub mod validator;

pub use config::{ConfigOverrides, EventType, ValidatorConfig};
pub use dispatch::{
    BroadcastDispatcher, Dispatch, FailureEvent, NoopDispatcher, RecordingDispatcher,
    TracingDispatcher,
};
pub use error::{Result, ValidatorError};
pub use report::ValidationErrors;
pub use rule::{Message, Outcome, Rule, RuleList, RuleSet, rule_fn};
pub use validator::{Validator, ValidatorBuilder, build, build_with};
