//! WASM-target tests for relay-core.
//!
//! Runs EventBus, audio validation, and SessionController tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use async_trait::async_trait;
use relay_core::audio::{self, AudioClip};
use relay_core::event_bus::EventBus;
use relay_core::ports::ChatPort;
use relay_core::session::SessionController;
use relay_types::api::ChatReply;
use relay_types::event::ClientEvent;
use relay_types::message::*;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(ClientEvent::TranscriptReady {
        text: "hello".to_string(),
    });
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn event_bus_clone_shares_state() {
    let bus1 = EventBus::new();
    let bus2 = bus1.clone();
    bus1.emit(ClientEvent::StatusFailed {
        message: "down".to_string(),
    });
    assert_eq!(bus2.drain().len(), 1);
}

// ─── Audio Validation Tests ──────────────────────────────

fn clip(name: &str, mime: &str, len: usize) -> AudioClip {
    AudioClip {
        name: name.to_string(),
        mime: mime.to_string(),
        bytes: vec![0u8; len],
    }
}

#[wasm_bindgen_test]
fn audio_rejects_disallowed_type() {
    let err = audio::validate(&clip("note.flac", "audio/flac", 1024)).unwrap_err();
    assert!(err.to_string().contains("WAV"));
}

#[wasm_bindgen_test]
fn audio_rejects_oversize() {
    let err =
        audio::validate(&clip("big.wav", "audio/wav", audio::MAX_AUDIO_BYTES + 1)).unwrap_err();
    assert!(err.to_string().contains("25MB"));
}

#[wasm_bindgen_test]
fn audio_accepts_wav() {
    assert!(audio::validate(&clip("ok.wav", "audio/wav", 1024)).is_ok());
}

// ─── SessionController Tests ─────────────────────────────

struct MockChat;

#[async_trait(?Send)]
impl ChatPort for MockChat {
    async fn send_turn(
        &self,
        _content: &str,
        _provider: Option<ProviderId>,
    ) -> relay_types::Result<ChatReply> {
        Ok(ChatReply {
            response: "All systems nominal".to_string(),
            routing: RoutingInfo {
                provider: ProviderId::Local,
                tier: None,
                reason: "routine query".to_string(),
            },
        })
    }
}

#[wasm_bindgen_test]
fn begin_turn_appends_user_message_synchronously() {
    let mut session = SessionController::new();
    session.input = "status check".to_string();
    let req = session.begin_turn().expect("should start a turn");

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
    assert_eq!(req.content, "status check");
    assert!(session.is_loading());
}

#[wasm_bindgen_test]
fn blank_input_is_noop() {
    let mut session = SessionController::new();
    session.input = "   ".to_string();
    assert!(session.begin_turn().is_none());
    assert!(session.messages().is_empty());
}

#[wasm_bindgen_test]
async fn full_turn_lifecycle() {
    let mut session = SessionController::new();
    let bus = EventBus::new();
    let chat = MockChat;

    session.input = "status check".to_string();
    let req = session.begin_turn().unwrap();
    match chat.send_turn(&req.content, req.provider).await {
        Ok(reply) => bus.emit(ClientEvent::ReplyReceived {
            turn: req.turn,
            text: reply.response,
            routing: reply.routing,
        }),
        Err(e) => bus.emit(ClientEvent::TurnFailed {
            turn: req.turn,
            message: e.to_string(),
        }),
    }
    for event in bus.drain() {
        session.apply(&event);
    }

    let log = session.messages();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].role, Role::Assistant);
    assert_eq!(log[1].content, "All systems nominal");
    assert!(!session.is_loading());
}

#[wasm_bindgen_test]
fn failed_turn_sets_error() {
    let mut session = SessionController::new();
    session.input = "hello?".to_string();
    let req = session.begin_turn().unwrap();

    session.apply(&ClientEvent::TurnFailed {
        turn: req.turn,
        message: "Network error: connection refused".to_string(),
    });
    assert_eq!(session.messages().len(), 1);
    assert!(!session.is_loading());
    assert!(session.error().unwrap().contains("connection refused"));
}

#[wasm_bindgen_test]
fn merge_transcription_spacing() {
    let mut session = SessionController::new();
    session.merge_transcription("hello");
    session.merge_transcription("world");
    assert_eq!(session.input, "hello world");
}
