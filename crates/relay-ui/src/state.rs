//! View-level state for the status and memory tabs.
//!
//! Both views own their state exclusively and fold request completions
//! in from the event bus each frame; neither touches the session log.

use chrono::{DateTime, Utc};
use relay_types::{
    api::{MemoryRecord, StatusSnapshot},
    event::{ClientEvent, MemoryMode},
};

// ─── Status View ─────────────────────────────────────────

/// Display catalog entry for one backend service, in the same order as
/// `StatusSnapshot::flags`.
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub port: Option<u16>,
}

pub const SERVICES: [ServiceInfo; StatusSnapshot::SERVICE_COUNT] = [
    ServiceInfo {
        name: "Ollama",
        description: "Local LLM for standard tasks",
        port: Some(11434),
    },
    ServiceInfo {
        name: "Memory Server",
        description: "Local vector storage",
        port: Some(5001),
    },
    ServiceInfo {
        name: "Claude API",
        description: "Complex reasoning tasks",
        port: None,
    },
    ServiceInfo {
        name: "Grok API",
        description: "Research and real-time info",
        port: None,
    },
    ServiceInfo {
        name: "Gemini API",
        description: "Quick lookups and documents",
        port: None,
    },
    ServiceInfo {
        name: "Mem0 API",
        description: "Cloud memory sync",
        port: None,
    },
];

/// State behind the status tab. A failed poll keeps the previous
/// snapshot on screen; only the error banner changes.
pub struct StatusViewState {
    pub snapshot: Option<StatusSnapshot>,
    pub error: Option<String>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl StatusViewState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            error: None,
            last_checked: None,
        }
    }

    pub fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::StatusUpdated { snapshot } => {
                self.snapshot = Some(*snapshot);
                self.last_checked = Some(Utc::now());
                self.error = None;
            }
            ClientEvent::StatusFailed { message } => {
                self.error = Some(message.clone());
            }
            _ => {}
        }
    }

    pub fn online_count(&self) -> usize {
        self.snapshot.map(|s| s.online_count()).unwrap_or(0)
    }
}

impl Default for StatusViewState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Memory View ─────────────────────────────────────────

/// State behind the memory tab. Each completed fetch wholesale-replaces
/// the displayed records; results for a superseded mode are dropped.
pub struct MemoryViewState {
    pub records: Vec<MemoryRecord>,
    pub query: String,
    pub mode: MemoryMode,
    pub error: Option<String>,
    /// Initial load dispatched; set when the tab first activates.
    pub started: bool,
    pending: Option<MemoryMode>,
}

impl MemoryViewState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            mode: MemoryMode::All,
            error: None,
            started: false,
            pending: None,
        }
    }

    /// Mode a query submission resolves to: an empty query falls back
    /// to the unfiltered listing.
    pub fn mode_for_query(query: &str) -> MemoryMode {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            MemoryMode::All
        } else {
            MemoryMode::Search(trimmed.to_string())
        }
    }

    /// Record that a fetch for `mode` was dispatched. A later dispatch
    /// supersedes an earlier one still in flight.
    pub fn begin_fetch(&mut self, mode: MemoryMode) {
        self.pending = Some(mode);
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::MemoriesLoaded { mode, records } => {
                if self.pending.as_ref() != Some(mode) {
                    log::warn!("dropping memory results for superseded mode");
                    return;
                }
                self.pending = None;
                self.mode = mode.clone();
                self.records = records.clone();
            }
            ClientEvent::MemoriesFailed { message } => {
                self.pending = None;
                self.error = Some(message.clone());
            }
            _ => {}
        }
    }
}

impl Default for MemoryViewState {
    fn default() -> Self {
        Self::new()
    }
}
