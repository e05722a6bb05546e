//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldguard_validator::prelude::*;` import that
//! brings in the factory, the validator, rules, and the dispatch port.
//!
//! # Examples
//!
//! ```
//! use fieldguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::builder()
//!     .rule("text", rules::not_blank("Message can't be blank."))
//!     .dispatcher(NoopDispatcher)
//!     .build();
//! assert!(validator.is_valid(&json!({ "text": "hi" }), None));
//! ```

// ============================================================================
// FACTORY AND VALIDATOR
// ============================================================================

pub use crate::validator::{Validator, ValidatorBuilder, build, build_with};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rule::{Message, Outcome, Rule, RuleList, RuleSet, rule_fn};
pub use crate::rule_set;
pub use crate::rules;

// ============================================================================
// CONFIGURATION, ERRORS, EVENTS
// ============================================================================

pub use crate::config::{ConfigOverrides, EventType, ValidatorConfig};
pub use crate::dispatch::{
    BroadcastDispatcher, Dispatch, FailureEvent, NoopDispatcher, RecordingDispatcher,
    TracingDispatcher,
};
pub use crate::error::{Result, ValidatorError};
pub use crate::report::ValidationErrors;
