use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A backend provider a turn can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Local,
    Claude,
    Grok,
    Gemini,
}

impl ProviderId {
    pub fn all() -> &'static [ProviderId] {
        &[
            ProviderId::Local,
            ProviderId::Claude,
            ProviderId::Grok,
            ProviderId::Gemini,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderId::Local => "Local",
            ProviderId::Claude => "Claude",
            ProviderId::Grok => "Grok",
            ProviderId::Gemini => "Gemini",
        }
    }

    /// Wire name, as the backend spells it in routing metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Local => "local",
            ProviderId::Claude => "claude",
            ProviderId::Grok => "grok",
            ProviderId::Gemini => "gemini",
        }
    }
}

/// Routing metadata the backend attaches to each reply: which provider
/// handled the turn and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingInfo {
    pub provider: ProviderId,
    /// Routing tier name, present in the backend's wire format but not
    /// needed for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    pub reason: String,
}

/// A single entry in the session log.
///
/// Ids are assigned client-side and never reused; the log is append-only
/// and entries are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Present only on assistant messages that came from a successful
    /// backend call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingInfo>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: text.into(),
            routing: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>, routing: RoutingInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: text.into(),
            routing: Some(routing),
            timestamp: Utc::now(),
        }
    }
}
