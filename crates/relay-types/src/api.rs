//! Wire shapes for the routing backend's HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::RoutingInfo;

/// Successful response from the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub routing: RoutingInfo,
}

/// Point-in-time health of every backend service. "Not yet checked" is
/// modeled client-side as the absence of a snapshot, not per-flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub local_ollama: bool,
    pub local_memory: bool,
    pub claude_api: bool,
    pub grok_api: bool,
    pub gemini_api: bool,
    pub mem0_api: bool,
}

impl StatusSnapshot {
    pub const SERVICE_COUNT: usize = 6;

    /// Flags in catalog order (see the status view's service table).
    pub fn flags(&self) -> [bool; Self::SERVICE_COUNT] {
        [
            self.local_ollama,
            self.local_memory,
            self.claude_api,
            self.grok_api,
            self.gemini_api,
            self.mem0_api,
        ]
    }

    pub fn online_count(&self) -> usize {
        self.flags().iter().filter(|up| **up).count()
    }
}

/// One record from the external memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub memory: String,
    /// Relevance in [0, 1]; present on search results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}
