use serde::{Deserialize, Serialize};

use crate::api::{MemoryRecord, StatusSnapshot};
use crate::message::RoutingInfo;

/// Which result set the memory browser is displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryMode {
    All,
    Search(String),
}

/// Completions delivered from spawned requests back to the frame loop.
/// The UI drains these once per frame and routes each one to the state
/// that owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClientEvent {
    /// The chat backend answered the turn with the given id.
    ReplyReceived {
        turn: u64,
        text: String,
        routing: RoutingInfo,
    },

    /// The chat request for the given turn failed.
    TurnFailed { turn: u64, message: String },

    /// Transcription finished; text is ready to merge into the input.
    TranscriptReady { text: String },

    TranscriptFailed { message: String },

    /// A status poll completed.
    StatusUpdated { snapshot: StatusSnapshot },

    StatusFailed { message: String },

    /// A memory fetch completed for the given mode.
    MemoriesLoaded {
        mode: MemoryMode,
        records: Vec<MemoryRecord>,
    },

    MemoriesFailed { message: String },
}
