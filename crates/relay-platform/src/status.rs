//! Status adapter — one GET against the backend's health endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;

use relay_core::ports::StatusPort;
use relay_types::{api::StatusSnapshot, config::ClientConfig, ClientError, Result};

pub struct HttpStatusAdapter {
    config: ClientConfig,
}

impl HttpStatusAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl StatusPort for HttpStatusAdapter {
    async fn fetch(&self) -> Result<StatusSnapshot> {
        let url = self.config.endpoint("/status");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::Backend(format!("HTTP {}", response.status())));
        }

        response
            .json::<StatusSnapshot>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}
