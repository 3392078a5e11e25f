//! Transcription adapter — uploads an audio clip as multipart form data
//! and returns the recognized text.
//!
//! A 2xx response can still carry a structured `{error}` body (the
//! backend's transcription service failed on the file itself); that
//! message is surfaced verbatim rather than as a generic failure.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use relay_core::{audio::AudioClip, ports::TranscribePort};
use relay_types::{config::ClientConfig, ClientError, Result};

pub struct HttpTranscribeAdapter {
    config: ClientConfig,
}

impl HttpTranscribeAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[derive(Deserialize)]
struct TranscribeResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn multipart_form(clip: &AudioClip) -> Result<web_sys::FormData> {
    let interop = |e: wasm_bindgen::JsValue| ClientError::Interop(format!("{:?}", e));

    let array = js_sys::Uint8Array::from(clip.bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&clip.mime);
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(interop)?;

    let form = web_sys::FormData::new().map_err(interop)?;
    form.append_with_blob_and_filename("audio", &blob, &clip.name)
        .map_err(interop)?;
    Ok(form)
}

#[async_trait(?Send)]
impl TranscribePort for HttpTranscribeAdapter {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String> {
        let url = self.config.endpoint("/transcribe");
        let form = multipart_form(clip)?;

        // The browser sets the multipart boundary header itself.
        let response = Request::post(&url)
            .body(form)
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

        let data: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        match (data.text, data.error) {
            (Some(text), _) => Ok(text),
            (None, Some(error)) => Err(ClientError::Backend(error)),
            (None, None) => Err(ClientError::Backend(
                "transcription returned no text".to_string(),
            )),
        }
    }
}
