//! Memory adapter — lists or searches the backend's cloud memory store.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use relay_core::ports::MemoryPort;
use relay_types::{api::MemoryRecord, config::ClientConfig, ClientError, Result};

pub struct HttpMemoryAdapter {
    config: ClientConfig,
}

impl HttpMemoryAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[derive(Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: Vec<MemoryRecord>,
}

async fn read_results(response: gloo_net::http::Response) -> Result<Vec<MemoryRecord>> {
    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ClientError::Backend(format!("HTTP {}: {}", status, text)));
    }

    let envelope: ResultsEnvelope = response
        .json()
        .await
        .map_err(|e| ClientError::Serialization(e.to_string()))?;
    Ok(envelope.results)
}

#[async_trait(?Send)]
impl MemoryPort for HttpMemoryAdapter {
    async fn list_all(&self) -> Result<Vec<MemoryRecord>> {
        let url = self.config.endpoint("/memory/cloud/all");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_results(response).await
    }

    async fn search(&self, query: &str) -> Result<Vec<MemoryRecord>> {
        let url = self.config.endpoint("/memory/cloud/search");

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&json!({ "query": query }))
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_results(response).await
    }
}
