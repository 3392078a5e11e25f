//! Port traits — the boundary between the session core and the browser.
//!
//! These traits are defined here in `relay-core` (pure Rust).
//! Implementations live in `relay-platform` (gloo-net HTTP adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use relay_types::{
    api::{ChatReply, MemoryRecord, StatusSnapshot},
    message::ProviderId,
    Result,
};

use crate::audio::AudioClip;

/// Sends one user turn to the routing backend. The backend picks the
/// provider unless an explicit override is given.
#[async_trait(?Send)]
pub trait ChatPort {
    async fn send_turn(&self, content: &str, provider: Option<ProviderId>) -> Result<ChatReply>;
}

/// Turns an audio clip into text. Callers are expected to validate the
/// clip (type, size) before reaching for the network.
#[async_trait(?Send)]
pub trait TranscribePort {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String>;
}

/// Reads a point-in-time health snapshot of the backend's services.
#[async_trait(?Send)]
pub trait StatusPort {
    async fn fetch(&self) -> Result<StatusSnapshot>;
}

/// Lists or searches the external memory store.
#[async_trait(?Send)]
pub trait MemoryPort {
    async fn list_all(&self) -> Result<Vec<MemoryRecord>>;
    async fn search(&self, query: &str) -> Result<Vec<MemoryRecord>>;
}
