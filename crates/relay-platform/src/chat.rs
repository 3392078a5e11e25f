//! Chat adapter — sends one user turn to the routing backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. The
//! adapter performs no retries; resubmission is the user's call.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::{json, Value};

use relay_core::ports::ChatPort;
use relay_types::{
    api::ChatReply,
    config::ClientConfig,
    message::ProviderId,
    ClientError, Result,
};

pub struct HttpChatAdapter {
    config: ClientConfig,
}

impl HttpChatAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// Request body for the chat endpoint. The `provider` key is present
/// only when the user overrides automatic routing.
pub fn chat_request_body(content: &str, provider: Option<ProviderId>) -> Value {
    let mut body = json!({ "message": content });
    if let Some(p) = provider {
        body["provider"] = json!(p.as_str());
    }
    body
}

#[async_trait(?Send)]
impl ChatPort for HttpChatAdapter {
    async fn send_turn(&self, content: &str, provider: Option<ProviderId>) -> Result<ChatReply> {
        let url = self.config.endpoint("/chat");
        let body = chat_request_body(content, provider);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClientError::Backend(format!("HTTP {}: {}", status, text)));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}
