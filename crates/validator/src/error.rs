//! Error types for validator operations.
//!
//! Rule failures are *not* errors: they are collected as messages and
//! returned as data. `ValidatorError` covers the cases where the caller asked
//! for something the validator cannot answer.

use std::borrow::Cow;

/// Errors returned by [`Validator`](crate::Validator) operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// `field_errors` was called for a field with no rule list.
    ///
    /// This is distinct from a registered field whose rules all passed,
    /// which yields `Ok(vec![])`.
    #[error("no rules registered for field `{field}`")]
    UnregisteredField {
        /// The field name that was looked up.
        field: Cow<'static, str>,
    },

    /// A typed record could not be converted to a JSON value for validation.
    #[error("failed to serialize record for validation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Creates an [`UnregisteredField`](Self::UnregisteredField) error.
    pub fn unregistered(field: impl Into<Cow<'static, str>>) -> Self {
        Self::UnregisteredField {
            field: field.into(),
        }
    }

    /// Returns `true` if this error reports an unregistered field.
    #[must_use]
    pub fn is_unregistered_field(&self) -> bool {
        matches!(self, Self::UnregisteredField { .. })
    }
}

/// Result type for validator operations.
pub type Result<T, E = ValidatorError> = std::result::Result<T, E>;
