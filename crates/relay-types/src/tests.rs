#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.routing.is_none());
    }

    #[test]
    fn test_message_assistant_carries_routing() {
        let routing = RoutingInfo {
            provider: ProviderId::Claude,
            tier: None,
            reason: "complex reasoning".to_string(),
        };
        let msg = Message::assistant("Sure.", routing.clone());
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.routing, Some(routing));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::User);
        assert_eq!(deserialized.content, "test input");
        assert_eq!(deserialized.id, msg.id);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_provider_serialization() {
        assert_eq!(
            serde_json::to_string(&ProviderId::Local).unwrap(),
            r#""local""#
        );
        let p: ProviderId = serde_json::from_str(r#""gemini""#).unwrap();
        assert_eq!(p, ProviderId::Gemini);
    }

    #[test]
    fn test_provider_all_and_labels() {
        let all = ProviderId::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&ProviderId::Grok));
        assert_eq!(ProviderId::Local.label(), "Local");
        assert_eq!(ProviderId::Claude.as_str(), "claude");
    }

    // ─── Wire Shape Tests ────────────────────────────────────

    #[test]
    fn test_chat_reply_parses_backend_payload() {
        // Shape the routing backend actually returns, tier included.
        let json = r#"{
            "response": "All systems nominal",
            "routing": {"provider": "local", "tier": "standard", "reason": "routine query"}
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "All systems nominal");
        assert_eq!(reply.routing.provider, ProviderId::Local);
        assert_eq!(reply.routing.tier.as_deref(), Some("standard"));
        assert_eq!(reply.routing.reason, "routine query");
    }

    #[test]
    fn test_chat_reply_tier_is_optional() {
        let json = r#"{
            "response": "hi",
            "routing": {"provider": "grok", "reason": "research"}
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert!(reply.routing.tier.is_none());
    }

    #[test]
    fn test_status_snapshot_parse_and_count() {
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
        assert_eq!(snapshot.flags().len(), StatusSnapshot::SERVICE_COUNT);
        assert!(!snapshot.flags()[3]); // grok_api
    }

    #[test]
    fn test_memory_record_minimal() {
        let record: MemoryRecord = serde_json::from_str(r#"{"memory": "likes rust"}"#).unwrap();
        assert_eq!(record.memory, "likes rust");
        assert!(record.score.is_none());
        assert!(record.metadata.is_none());
    }

    #[test]
    fn test_memory_record_with_score_and_metadata() {
        let json = r#"{"memory": "prefers dark mode", "score": 0.87, "metadata": {"source": "chat"}}"#;
        let record: MemoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.score, Some(0.87));
        assert_eq!(
            record.metadata.unwrap()["source"],
            serde_json::json!("chat")
        );
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_client_event_serialization() {
        let event = ClientEvent::TurnFailed {
            turn: 3,
            message: "connection refused".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TurnFailed"));
        assert!(json.contains("connection refused"));
    }

    #[test]
    fn test_memory_mode_equality() {
        assert_eq!(MemoryMode::All, MemoryMode::All);
        assert_eq!(
            MemoryMode::Search("rust".to_string()),
            MemoryMode::Search("rust".to_string())
        );
        assert_ne!(MemoryMode::All, MemoryMode::Search(String::new()));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn test_config_endpoint_join() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/chat"), "http://localhost:8000/chat");
        assert_eq!(config.endpoint("status"), "http://localhost:8000/status");

        let trailing = ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(trailing.endpoint("/chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ClientConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ClientError::Validation("File too large. Maximum size is 25MB".to_string());
        assert_eq!(err.to_string(), "File too large. Maximum size is 25MB");

        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ClientError::Backend("HTTP 503: routing unavailable".to_string());
        assert_eq!(err.to_string(), "HTTP 503: routing unavailable");
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let err: ClientError = serde_err.into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ClientError::Network("timeout".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
