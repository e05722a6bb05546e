//! Aggregated per-field failure messages.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rule::Message;

/// Field name → ordered failure messages.
///
/// Only fields with at least one failure are present. Keys keep the order in
/// which the validator visited the fields. Serializes as a JSON object:
///
/// ```json
/// { "one": ["Data must be one."], "two": ["Data must be two."] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: IndexMap<Cow<'static, str>, Vec<Message>>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Records `messages` for `field`. Empty message lists are ignored.
    pub fn record(&mut self, field: impl Into<Cow<'static, str>>, messages: Vec<Message>) {
        if !messages.is_empty() {
            self.fields.insert(field.into(), messages);
        }
    }

    /// Messages for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[Message]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Failing field names, in visit order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| &**k)
    }

    /// `(field, messages)` pairs, in visit order.
    pub fn iter(&self) -> FieldErrorsIter<'_> {
        FieldErrorsIter {
            inner: self.fields.iter(),
        }
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of messages across all fields.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a str, &'a [Message]);
    type IntoIter = FieldErrorsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(field, messages)` pairs of [`ValidationErrors`].
#[derive(Debug, Clone)]
pub struct FieldErrorsIter<'a> {
    inner: indexmap::map::Iter<'a, Cow<'static, str>, Vec<Message>>,
}

impl<'a> Iterator for FieldErrorsIter<'a> {
    type Item = (&'a str, &'a [Message]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(field, messages)| (&**field, messages.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldErrorsIter<'_> {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.len())?;
        for (field, messages) in self {
            for message in messages {
                writeln!(f, "  [{field}] {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
