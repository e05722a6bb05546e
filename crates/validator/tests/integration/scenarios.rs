//! The reference scenarios: two fields, each with two rules.

use crate::common::*;
use fieldguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn all_fields_valid_returns_true_without_dispatch() {
    init_tracing();
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(validator.is_valid(&json!({ "one": 1, "two": 2 }), None));
    assert!(recorder.is_empty());
}

#[test]
fn failing_fields_dispatch_once_with_only_failures() {
    init_tracing();
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(!validator.is_valid(&json!({ "one": -2, "two": 6 }), None));

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::VALIDATION_FAILED);
    assert_eq!(
        serde_json::to_value(&events[0].errors).unwrap(),
        json!({
            "one": ["Data must be one.", "Data must be positive."],
            "two": ["Data must be two."]
        })
    );
}

#[test]
fn passing_field_is_left_out_of_the_payload() {
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(!validator.is_valid(&json!({ "one": 1, "two": 3 }), None));

    let errors = recorder.last().unwrap().errors;
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["two"]);
}

#[test]
fn absent_value_yields_no_errors() {
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(validator.field_errors("one", None).unwrap().is_empty());
    assert!(validator.field_errors("two", None).unwrap().is_empty());
}

#[test]
fn single_field_reports_only_its_failures() {
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    let errors = validator.field_errors("one", Some(&json!(99))).unwrap();
    assert_eq!(errors, vec!["Data must be one."]);
    assert!(validator.field_errors("one", Some(&json!(1))).unwrap().is_empty());
    assert!(validator.field_errors("two", Some(&json!(2))).unwrap().is_empty());
    assert!(recorder.is_empty());
}

#[test]
fn unregistered_field_is_distinct_from_passing() {
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    let err = validator.field_errors("three", Some(&json!(3))).unwrap_err();
    assert!(matches!(
        err,
        ValidatorError::UnregisteredField { ref field } if field == "three"
    ));
}

#[test]
fn missing_fields_never_fail() {
    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(validator.is_valid(&json!({}), None));
    assert!(validator.is_valid(&json!({ "one": 1 }), None));
    assert!(validator.is_valid(&json!({ "unrelated": -5 }), None));
    assert!(recorder.is_empty());
}

#[test]
fn is_valid_runs_every_rule_once_per_field() {
    let counts: Vec<Arc<AtomicUsize>> = (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let counted = |idx: usize, inner: fn(&serde_json::Value) -> Outcome| {
        let count = Arc::clone(&counts[idx]);
        rule_fn(move |value| {
            count.fetch_add(1, Ordering::SeqCst);
            inner(value)
        })
    };

    let validator = Validator::builder()
        .rule("one", counted(0, is_one))
        .rule("one", counted(2, is_positive))
        .rule("two", counted(1, is_two))
        .rule("two", counted(2, is_positive))
        .dispatcher(NoopDispatcher)
        .build();

    assert!(validator.is_valid(&json!({ "one": 1, "two": 2 }), None));
    assert_eq!(counts[0].load(Ordering::SeqCst), 1);
    assert_eq!(counts[1].load(Ordering::SeqCst), 1);
    assert_eq!(counts[2].load(Ordering::SeqCst), 2);

    let _ = validator.field_errors("one", Some(&json!(1)));
    assert_eq!(counts[0].load(Ordering::SeqCst), 2);
    assert_eq!(counts[1].load(Ordering::SeqCst), 1);
    assert_eq!(counts[2].load(Ordering::SeqCst), 3);
}

#[test]
fn message_validator_from_stock_rules() {
    let recorder = RecordingDispatcher::new();
    let validator = Validator::builder()
        .rule("sender_id", rules::numeric("ID must be a number."))
        .rule("text", rules::not_blank("Message can't be blank."))
        .rule(
            "text",
            rules::max_length(250, "Your message must be 250 characters or shorter."),
        )
        .failure_event_type("MESSAGE_VALIDATION_FAILED")
        .dispatcher(recorder.clone())
        .build();

    assert!(validator.is_valid(&json!({ "sender_id": 42, "text": "hello" }), None));

    let long = "x".repeat(251);
    assert!(!validator.is_valid(
        &json!({ "sender_id": "abc", "text": long }),
        Some(json!({ "thread": 9 }))
    ));

    let event = recorder.last().unwrap();
    assert_eq!(event.event_type.as_str(), "MESSAGE_VALIDATION_FAILED");
    assert_eq!(event.options, Some(json!({ "thread": 9 })));
    assert_eq!(
        event.errors.get("sender_id").unwrap(),
        ["ID must be a number."]
    );
    assert_eq!(
        event.errors.get("text").unwrap(),
        ["Your message must be 250 characters or shorter."]
    );
}

#[test]
#[should_panic(expected = "rule exploded")]
fn panicking_rule_propagates() {
    let validator = Validator::builder()
        .rule("one", rule_fn(|_| panic!("rule exploded")))
        .dispatcher(NoopDispatcher)
        .build();
    let _ = validator.is_valid(&json!({ "one": 1 }), None);
}

#[test]
fn empty_message_still_counts_as_failure() {
    let recorder = RecordingDispatcher::new();
    let validator = Validator::builder()
        .rule("f", rule_fn(|_| Outcome::fail("")))
        .dispatcher(recorder.clone())
        .build();

    assert_eq!(validator.field_errors("f", Some(&json!(1))).unwrap(), [""]);
    assert!(!validator.is_valid(&json!({ "f": 1 }), None));

    let event = recorder.last().unwrap();
    assert_eq!(
        serde_json::to_value(&event.errors).unwrap(),
        json!({ "f": [""] })
    );
}

#[test]
fn builder_field_replaces_an_existing_list() {
    let validator = Validator::builder()
        .field("one", RuleList::new().with(is_one))
        .field("one", RuleList::new().with(is_two))
        .dispatcher(NoopDispatcher)
        .build();

    assert_eq!(validator.fields().collect::<Vec<_>>(), ["one"]);
    assert_eq!(
        validator.field_errors("one", Some(&json!(1))).unwrap(),
        ["Data must be two."]
    );
}
