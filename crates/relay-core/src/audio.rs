//! Client-side audio preconditions for transcription uploads.
//!
//! The backend validates again; these checks exist so an obviously bad
//! file fails inline without a network round trip.

use relay_types::{ClientError, Result};

/// Largest clip the transcription endpoint accepts.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

/// MIME types the transcription endpoint accepts.
pub const ALLOWED_AUDIO_TYPES: &[&str] = &[
    "audio/wav",
    "audio/mp3",
    "audio/mpeg",
    "audio/webm",
    "audio/ogg",
    "audio/m4a",
];

/// Extensions accepted when the browser reports no MIME type for a
/// dropped file.
const ALLOWED_AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "webm", "ogg", "m4a"];

/// An audio payload captured from the browser, ready to upload.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl AudioClip {
    fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// Check type and size before any network call. Violations surface as
/// `ClientError::Validation` with a message fit for inline display.
pub fn validate(clip: &AudioClip) -> Result<()> {
    let type_ok = if clip.mime.is_empty() {
        clip.extension()
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                ALLOWED_AUDIO_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    } else {
        ALLOWED_AUDIO_TYPES.contains(&clip.mime.as_str())
    };

    if !type_ok {
        return Err(ClientError::Validation(
            "Please upload a valid audio file (WAV, MP3, WebM, OGG, M4A)".to_string(),
        ));
    }

    if clip.bytes.len() > MAX_AUDIO_BYTES {
        return Err(ClientError::Validation(
            "File too large. Maximum size is 25MB".to_string(),
        ));
    }

    Ok(())
}
