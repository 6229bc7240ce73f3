use serde_json::{json, Value};
use session_greeter::config::{GreetingConfig, DEFAULT_GREETING};
use session_greeter::core::{Tracker, TrackerEvent};
use session_greeter::effects::{ActionSessionStart, OutboundMessage};
use session_greeter::executor::{ActionCall, ActionExecutor, ExecutorBuilder, ExecutorError};

fn call_for(events: Value) -> String {
    json!({
        "next_action": "action_session_start",
        "sender_id": "customer-42",
        "tracker": {"sender_id": "customer-42", "events": events},
        "domain": {"responses": {}},
        "version": "3.6.0"
    })
    .to_string()
}

async fn respond(events: Value) -> Value {
    let body = ActionExecutor::with_defaults()
        .run_json(&call_for(events))
        .await
        .unwrap();
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn fresh_session_is_greeted() {
    let response = respond(json!([{"event": "session_started"}])).await;

    assert_eq!(
        response,
        json!({"events": [], "responses": [{"text": DEFAULT_GREETING}]})
    );
}

#[tokio::test]
async fn bot_already_spoke_in_session() {
    let response = respond(json!([
        {"event": "session_started"},
        {"event": "bot", "text": "hi"}
    ]))
    .await;

    assert_eq!(response, json!({"events": [], "responses": []}));
}

#[tokio::test]
async fn user_message_before_session_marker_is_greeted() {
    let response = respond(json!([
        {"event": "user", "text": "hello"},
        {"event": "session_started"}
    ]))
    .await;

    assert_eq!(response["responses"][0]["text"], DEFAULT_GREETING);
}

#[tokio::test]
async fn empty_history_is_greeted() {
    let response = respond(json!([])).await;
    assert_eq!(response["responses"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn odd_event_shapes_do_not_fail_the_call() {
    let response = respond(json!([
        {"event": "session_started"},
        {"event": 12},
        "not an event",
        null,
        {"event": "user_featurization", "use_text_for_featurization": false}
    ]))
    .await;

    assert_eq!(response["responses"][0]["text"], DEFAULT_GREETING);
}

#[tokio::test]
async fn null_tracker_fields_still_greet() {
    let body = json!({
        "next_action": "action_session_start",
        "tracker": {"sender_id": null, "events": null, "slots": null}
    })
    .to_string();

    let response: Value =
        serde_json::from_str(&ActionExecutor::with_defaults().run_json(&body).await.unwrap())
            .unwrap();

    assert_eq!(
        response,
        json!({"events": [], "responses": [{"text": DEFAULT_GREETING}]})
    );
}

#[tokio::test]
async fn non_array_history_still_greets() {
    let response = respond(json!("corrupted")).await;
    assert_eq!(response["responses"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn repeated_session_start_greets_once() {
    let executor = ActionExecutor::with_defaults();
    let tracker = Tracker::new("customer-7").with_events(vec![TrackerEvent::session_started()]);

    let first = executor
        .run(ActionCall::new("action_session_start", tracker.clone()))
        .await
        .unwrap();
    let tracker = first
        .responses
        .iter()
        .filter_map(|m| m.text.clone())
        .fold(tracker, |t, text| t.record(TrackerEvent::bot_now(text)));
    let second = executor
        .run(ActionCall::new("action_session_start", tracker))
        .await
        .unwrap();

    assert_eq!(first.responses.len() + second.responses.len(), 1);
    assert!(first.events.is_empty() && second.events.is_empty());
}

#[tokio::test]
async fn concurrent_sessions_are_isolated() {
    let executor = ActionExecutor::with_defaults();
    let fresh = Tracker::new("a").with_events(vec![TrackerEvent::session_started()]);
    let greeted = fresh.record(TrackerEvent::bot("hi"));

    let (fresh, greeted) = tokio::join!(
        executor.run(ActionCall::new("action_session_start", fresh)),
        executor.run(ActionCall::new("action_session_start", greeted)),
    );

    assert_eq!(fresh.unwrap().responses.len(), 1);
    assert!(greeted.unwrap().responses.is_empty());
}

#[tokio::test]
async fn configured_greeting_reaches_the_response() {
    let config = GreetingConfig::from_json_str(r#"{"text": "Hi, this is your bank."}"#).unwrap();
    let executor = ExecutorBuilder::new()
        .action(ActionSessionStart::new(config))
        .build()
        .unwrap();

    let response = executor
        .run(ActionCall::new("action_session_start", Tracker::new("x")))
        .await
        .unwrap();

    assert_eq!(
        response.responses,
        vec![OutboundMessage::text("Hi, this is your bank.")]
    );
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let body = json!({
        "next_action": "action_unknown",
        "tracker": {"sender_id": "x", "events": []}
    })
    .to_string();

    let result = ActionExecutor::with_defaults().run_json(&body).await;

    assert!(matches!(result, Err(ExecutorError::ActionNotFound(name)) if name == "action_unknown"));
}
