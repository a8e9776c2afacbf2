//! Hosted speech-recognition endpoint (OpenAI audio transcriptions API).
//!
//! Multipart form upload with `model` and `file` fields, Bearer auth,
//! JSON response with a `text` field returned verbatim.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::TranscribeError;

const TRANSCRIPTIONS_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

pub(super) async fn transcribe(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    audio: &Path,
) -> Result<String, TranscribeError> {
    let bytes = std::fs::read(audio).map_err(|source| TranscribeError::AudioUnreadable {
        path: audio.to_path_buf(),
        source,
    })?;

    let filename = audio
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio")
        .to_string();

    let form = reqwest::multipart::Form::new()
        .text("model", model.to_string())
        .part(
            "file",
            reqwest::multipart::Part::bytes(bytes)
                .file_name(filename)
                .mime_str(mime_for(audio))
                .map_err(TranscribeError::Request)?,
        );

    let response = client
        .post(TRANSCRIPTIONS_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .multipart(form)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(TranscribeError::Api { status, body });
    }

    let body = response.text().await?;
    let parsed: TranscriptionResponse = serde_json::from_str(&body)?;
    Ok(parsed.text)
}

/// MIME type from the file extension; the endpoint sniffs the content
/// anyway, so octet-stream is an acceptable fallback.
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_extracts_text() {
        let body = r#"{"text": "What is the capital of Sudan?"}"#;
        let parsed: TranscriptionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text, "What is the capital of Sudan?");
    }

    #[test]
    fn response_parsing_rejects_missing_text_field() {
        let body = r#"{"transcript": "hello"}"#;
        assert!(serde_json::from_str::<TranscriptionResponse>(body).is_err());
    }

    #[test]
    fn mime_covers_common_recordings() {
        assert_eq!(mime_for(Path::new("CapitalOfSudan.m4a")), "audio/mp4");
        assert_eq!(mime_for(Path::new("RandasQuestion.ogg")), "audio/ogg");
        assert_eq!(mime_for(Path::new("take1.WAV")), "audio/wav");
        assert_eq!(mime_for(Path::new("raw")), "application/octet-stream");
    }
}
