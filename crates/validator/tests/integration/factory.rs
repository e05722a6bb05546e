//! Factory defaults, shallow merge, and instance independence.

use crate::common::*;
use fieldguard_validator::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::absent(None)]
#[case::empty(Some(ConfigOverrides::new()))]
fn default_config_accepts_anything(#[case] overrides: Option<ConfigOverrides>) {
    let recorder = RecordingDispatcher::new();
    let validator = build_with(overrides, recorder.clone());

    assert_eq!(validator.failure_event_type(), &EventType::VALIDATION_FAILED);
    assert!(validator.is_valid(&json!({ "one": -100 }), None));
    assert!(validator.is_valid(&Value::Null, None));
    assert!(recorder.is_empty());
}

#[test]
fn custom_event_type_is_dispatched() {
    let recorder = RecordingDispatcher::new();
    let validator = build_with(
        Some(
            ConfigOverrides::new()
                .rules(one_two_rules())
                .failure_event_type(String::from("FORM_INVALID")),
        ),
        recorder.clone(),
    );

    assert!(!validator.is_valid(&json!({ "one": 0 }), None));
    assert_eq!(recorder.last().unwrap().event_type, EventType::from("FORM_INVALID"));
}

#[test]
fn supplied_rules_replace_defaults_wholesale() {
    let base = ValidatorConfig {
        rules: one_two_rules(),
        failure_event_type: EventType::new("BASE"),
    };
    let merged = base.merge(ConfigOverrides::new().rules(rule_set! { "two" => [is_two] }));

    assert_eq!(merged.rules.fields().collect::<Vec<_>>(), ["two"]);
    assert_eq!(merged.failure_event_type.as_str(), "BASE");
}

#[test]
fn each_build_is_independent() {
    let first = RecordingDispatcher::new();
    let second = RecordingDispatcher::new();
    let a = one_two_validator(&first);
    let b = one_two_validator(&second);

    assert!(!a.is_valid(&json!({ "one": 2 }), None));
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(b.is_valid(&json!({ "one": 1 }), None));
}

#[test]
fn fields_follow_declaration_order() {
    let rules = rule_set! {
        "zeta" => [is_one],
        "alpha" => [is_two],
    };
    let validator = build(Some(rules.into()));
    assert_eq!(validator.fields().collect::<Vec<_>>(), ["zeta", "alpha"]);
    assert!(validator.has_field("alpha"));
    assert!(!validator.has_field("beta"));
}

#[test]
fn typed_records_are_validated() {
    #[derive(serde::Serialize)]
    struct Pair {
        one: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        two: Option<i32>,
    }

    let recorder = RecordingDispatcher::new();
    let validator = one_two_validator(&recorder);

    assert!(validator.is_valid_record(&Pair { one: 1, two: None }, None).unwrap());
    assert!(validator.is_valid_record(&Pair { one: 1, two: Some(2) }, None).unwrap());
    assert!(!validator.is_valid_record(&Pair { one: 1, two: Some(-2) }, None).unwrap());
    assert_eq!(
        recorder.last().unwrap().errors.get("two").unwrap(),
        ["Data must be two.", "Data must be positive."]
    );
}

#[test]
fn validator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Validator>();
}
