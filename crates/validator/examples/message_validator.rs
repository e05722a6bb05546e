//! Validating chat messages with stock rules.
//!
//! Failures are captured by a recording dispatcher and printed at the end.

use fieldguard_validator::prelude::*;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt().init();

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

    let good = json!({ "sender_id": 7, "text": "hello" });
    let bad = json!({ "sender_id": "seven", "text": "" });

    println!("good message valid: {}", validator.is_valid(&good, None));
    println!("bad message valid:  {}", validator.is_valid(&bad, Some(json!({ "thread": 1 }))));

    for event in recorder.events() {
        println!("dispatched {}:", event.event_type);
        print!("{}", event.errors);
    }

    match validator.field_errors("subject", Some(&json!("hi"))) {
        Ok(errors) => println!("subject errors: {errors:?}"),
        Err(err) => println!("subject: {err}"),
    }
}
