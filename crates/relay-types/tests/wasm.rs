//! WASM-target tests for relay-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use relay_types::api::*;
use relay_types::config::*;
use relay_types::error::*;
use relay_types::event::*;
use relay_types::message::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert!(msg.routing.is_none());
}

#[wasm_bindgen_test]
fn message_assistant_carries_routing() {
    let routing = RoutingInfo {
        provider: ProviderId::Claude,
        tier: None,
        reason: "complex reasoning".to_string(),
    };
    let msg = Message::assistant("Sure.", routing.clone());
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.routing, Some(routing));
}

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    let a = Message::user("one");
    let b = Message::user("one");
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = Message::user("test input");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::User);
    assert_eq!(deserialized.content, "test input");
}

// ─── Role / Provider Serialization ───────────────────────

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        r#""assistant""#
    );
}

#[wasm_bindgen_test]
fn provider_serialization() {
    assert_eq!(
        serde_json::to_string(&ProviderId::Local).unwrap(),
        r#""local""#
    );
    let p: ProviderId = serde_json::from_str(r#""gemini""#).unwrap();
    assert_eq!(p, ProviderId::Gemini);
}

// ─── Wire Shape Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn chat_reply_parses_backend_payload() {
    let json = r#"{
        "response": "All systems nominal",
        "routing": {"provider": "local", "tier": "standard", "reason": "routine query"}
    }"#;
    let reply: ChatReply = serde_json::from_str(json).unwrap();
    assert_eq!(reply.response, "All systems nominal");
    assert_eq!(reply.routing.provider, ProviderId::Local);
    assert_eq!(reply.routing.reason, "routine query");
}

#[wasm_bindgen_test]
fn status_snapshot_parse_and_count() {
    let json = r#"{
        "local_ollama": true,
        "local_memory": true,
        "claude_api": true,
        "grok_api": false,
        "gemini_api": true,
        "mem0_api": true
    }"#;
    let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.online_count(), 5);
}

#[wasm_bindgen_test]
fn memory_record_with_score() {
    let json = r#"{"memory": "prefers dark mode", "score": 0.87}"#;
    let record: MemoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.score, Some(0.87));
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn client_event_serialization() {
    let event = ClientEvent::TurnFailed {
        turn: 3,
        message: "connection refused".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("TurnFailed"));
}

#[wasm_bindgen_test]
fn memory_mode_equality() {
    assert_eq!(MemoryMode::All, MemoryMode::All);
    assert_ne!(MemoryMode::All, MemoryMode::Search(String::new()));
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn default_config() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.poll_interval_secs, 30);
}

#[wasm_bindgen_test]
fn config_endpoint_join() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("/chat"), "http://localhost:8000/chat");
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    let err = ClientError::Network("connection refused".to_string());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[wasm_bindgen_test]
fn error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
    let err: ClientError = serde_err.into();
    assert!(matches!(err, ClientError::Serialization(_)));
}
