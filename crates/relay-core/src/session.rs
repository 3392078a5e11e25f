//! Session controller — owns the message log and the turn lifecycle.
//!
//! One user turn runs in two halves. `begin_turn` is the synchronous
//! half: it checks the in-flight guard, appends the user's message, and
//! hands back a `TurnRequest` for the caller to dispatch. The async half
//! comes back through the event bus as a `ReplyReceived` or `TurnFailed`
//! completion, which `apply` folds into the log. The guard and the
//! user-message append both happen before any suspension point, so the
//! user's own message is visible even when the backend call later fails.

use relay_types::{
    event::ClientEvent,
    message::{Message, ProviderId},
};

use crate::audio::{self, AudioClip};

/// A chat request ready to dispatch, produced by `begin_turn`.
///
/// `turn` identifies which submission a completion answers; completions
/// for any other turn are dropped on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRequest {
    pub turn: u64,
    pub content: String,
    pub provider: Option<ProviderId>,
}

pub struct SessionController {
    messages: Vec<Message>,
    /// Current input buffer. Panels edit this directly.
    pub input: String,
    error: Option<String>,
    selected_provider: Option<ProviderId>,
    transcribe_error: Option<String>,
    /// Transcriptions currently in flight. They may overlap each other
    /// and any pending chat turn.
    transcribing: u32,
    turn_seq: u64,
    in_flight: Option<u64>,
    focus_input: bool,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            error: None,
            selected_provider: None,
            transcribe_error: None,
            transcribing: 0,
            turn_seq: 0,
            in_flight: None,
            focus_input: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True between dispatching a chat request and applying its
    /// completion. At most one chat request is in flight per session.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_provider(&self) -> Option<ProviderId> {
        self.selected_provider
    }

    pub fn transcribe_error(&self) -> Option<&str> {
        self.transcribe_error.as_deref()
    }

    pub fn is_transcribing(&self) -> bool {
        self.transcribing > 0
    }

    /// Start a turn from the current input buffer.
    ///
    /// Returns `None` (a no-op) when the trimmed input is empty or a
    /// chat request is already in flight. Otherwise appends the user
    /// message, clears the buffer and any previous error, and returns
    /// the request to dispatch. Everything here is synchronous; the
    /// caller performs the actual network call.
    pub fn begin_turn(&mut self) -> Option<TurnRequest> {
        let content = self.input.trim().to_string();
        if content.is_empty() || self.in_flight.is_some() {
            return None;
        }

        self.push_message(Message::user(&content));
        self.input.clear();
        self.error = None;
        self.turn_seq += 1;
        self.in_flight = Some(self.turn_seq);

        Some(TurnRequest {
            turn: self.turn_seq,
            content,
            provider: self.selected_provider,
        })
    }

    /// Pure state update; takes effect on the next `begin_turn`.
    /// `None` means automatic routing.
    pub fn select_provider(&mut self, choice: Option<ProviderId>) {
        self.selected_provider = choice;
    }

    /// Append transcribed text to the input buffer, separated by a
    /// single space when the buffer is non-empty. Never submits.
    pub fn merge_transcription(&mut self, text: &str) {
        if !self.input.is_empty() {
            self.input.push(' ');
        }
        self.input.push_str(text);
        self.focus_input = true;
    }

    /// Validate a dropped clip. On success the caller dispatches the
    /// upload; on failure the error is shown inline and no network call
    /// is made.
    pub fn accept_audio(&mut self, clip: &AudioClip) -> bool {
        match audio::validate(clip) {
            Ok(()) => {
                self.transcribe_error = None;
                self.transcribing += 1;
                true
            }
            Err(e) => {
                self.transcribe_error = Some(e.to_string());
                false
            }
        }
    }

    /// Fold a completion from the event bus into session state.
    /// Completions for views (status, memory) are ignored here.
    pub fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::ReplyReceived {
                turn,
                text,
                routing,
            } => {
                if self.in_flight != Some(*turn) {
                    log::warn!("dropping reply for superseded turn {}", turn);
                    return;
                }
                self.in_flight = None;
                self.push_message(Message::assistant(text, routing.clone()));
                self.focus_input = true;
            }
            ClientEvent::TurnFailed { turn, message } => {
                if self.in_flight != Some(*turn) {
                    log::warn!("dropping failure for superseded turn {}", turn);
                    return;
                }
                self.in_flight = None;
                self.error = Some(message.clone());
                self.focus_input = true;
            }
            ClientEvent::TranscriptReady { text } => {
                self.transcribing = self.transcribing.saturating_sub(1);
                self.merge_transcription(text);
            }
            ClientEvent::TranscriptFailed { message } => {
                self.transcribing = self.transcribing.saturating_sub(1);
                self.transcribe_error = Some(message.clone());
            }
            _ => {}
        }
    }

    /// One-shot focus request, consumed by the input widget each frame.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_input)
    }

    /// Discard the conversation and all per-turn state. A completion
    /// for a pre-reset turn no longer matches and is dropped.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.error = None;
        self.transcribe_error = None;
        self.in_flight = None;
    }

    /// Append, clamping the timestamp so log order and timestamp order
    /// never disagree even if the wall clock steps backwards.
    fn push_message(&mut self, mut msg: Message) {
        if let Some(last) = self.messages.last() {
            if msg.timestamp < last.timestamp {
                msg.timestamp = last.timestamp;
            }
        }
        self.messages.push(msg);
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
