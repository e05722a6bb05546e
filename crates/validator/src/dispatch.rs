//! The failure-event port.
//!
//! A [`Validator`](crate::Validator) never knows who listens for failures.
//! It hands a [`FailureEvent`] to whatever [`Dispatch`] implementation it was
//! built with, exactly once per failed `is_valid` call.
//!
//! Stock implementations:
//!
//! - any `Fn(FailureEvent) + Send + Sync` closure
//! - `Arc<D>` for any dispatcher `D`, so one dispatcher can serve several
//!   validators
//! - [`TracingDispatcher`], the default, which logs the event
//! - [`RecordingDispatcher`], which keeps every event for later inspection
//! - [`BroadcastDispatcher`], fire-and-forget over a `tokio` broadcast channel
//! - [`NoopDispatcher`], which drops the event

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::config::EventType;
use crate::report::ValidationErrors;

// ============================================================================
// EVENT
// ============================================================================

/// Payload dispatched when `is_valid` finds at least one failing field.
///
/// Serialized shape: `{ "type": ..., "options": ..., "errors": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureEvent {
    /// The validator's configured failure event type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Caller-supplied options, passed through untouched.
    pub options: Option<Value>,
    /// Failing fields and their messages.
    pub errors: ValidationErrors,
}

// ============================================================================
// PORT
// ============================================================================

/// Receives failure events from a validator.
///
/// Dispatch is synchronous and infallible from the validator's point of
/// view. Implementations that deliver asynchronously must not block.
pub trait Dispatch: Send + Sync {
    /// Delivers one failure event.
    fn dispatch(&self, event: FailureEvent);
}

impl<F> Dispatch for F
where
    F: Fn(FailureEvent) + Send + Sync,
{
    fn dispatch(&self, event: FailureEvent) {
        self(event);
    }
}

impl<D> Dispatch for Arc<D>
where
    D: Dispatch + ?Sized,
{
    fn dispatch(&self, event: FailureEvent) {
        (**self).dispatch(event);
    }
}

// ============================================================================
// TRACING
// ============================================================================

/// Logs each failure event at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

impl Dispatch for TracingDispatcher {
    fn dispatch(&self, event: FailureEvent) {
        tracing::warn!(
            event_type = %event.event_type,
            failed_fields = event.errors.len(),
            errors = ?event.errors,
            options = ?event.options,
            "validation failed"
        );
    }
}

// ============================================================================
// NOOP
// ============================================================================

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

impl Dispatch for NoopDispatcher {
    fn dispatch(&self, _event: FailureEvent) {}
}

// ============================================================================
// RECORDING
// ============================================================================

/// Keeps every dispatched event in memory.
///
/// Clones share the same log, so a test can hand one clone to the validator
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    events: Arc<Mutex<Vec<FailureEvent>>>,
}

impl RecordingDispatcher {
    /// Creates a dispatcher with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<FailureEvent> {
        self.events.lock().clone()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<FailureEvent> {
        self.events.lock().last().cloned()
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if nothing has been dispatched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Removes and returns every recorded event.
    pub fn take(&self) -> Vec<FailureEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, event: FailureEvent) {
        self.events.lock().push(event);
    }
}

// ============================================================================
// BROADCAST
// ============================================================================

/// Publishes events on a `tokio` broadcast channel.
///
/// Sending never blocks. With no live receivers the event is dropped, so the
/// validator's verdict never depends on delivery.
#[derive(Debug, Clone)]
pub struct BroadcastDispatcher {
    sender: broadcast::Sender<FailureEvent>,
}

impl BroadcastDispatcher {
    /// Creates a channel with room for `capacity` undelivered events per
    /// receiver and returns the dispatcher plus a first receiver.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, as `tokio::sync::broadcast::channel` does.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, broadcast::Receiver<FailureEvent>) {
        let (sender, receiver) = broadcast::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Opens another receiver on the same channel.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FailureEvent> {
        self.sender.subscribe()
    }
}

impl Dispatch for BroadcastDispatcher {
    fn dispatch(&self, event: FailureEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("failure event dropped: no active receivers");
        }
    }
}
