//! Error taxonomy for the two pipeline stages.
//!
//! Every failure mode the engines can hit maps to one variant with a
//! human-readable message. No retry is attempted anywhere; the caller
//! labels the stage and reports.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the transcription stage.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("audio file not found: {}", path.display())]
    AudioNotFound { path: PathBuf },

    #[error("failed to read audio file {}: {source}", path.display())]
    AudioUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no API key configured for remote transcription (set {env})")]
    MissingApiKey { env: &'static str },

    #[error("no whisper model path configured for local transcription")]
    MissingModelPath,

    #[error("whisper model not found at: {}", path.display())]
    ModelNotFound { path: PathBuf },

    #[error("transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("transcription API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse transcription response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("unsupported audio input: {0}")]
    UnsupportedAudio(String),

    #[error("transcription engine failed: {0}")]
    Engine(String),

    #[error("transcription produced no text")]
    EmptyTranscript,
}

/// Failures of the answering stage.
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("no API key configured for remote answering (set {env})")]
    MissingApiKey { env: &'static str },

    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("completion response contained no choices")]
    NoChoices,

    #[error("failed to start local model process '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("local model process exited with {status}: {stderr}")]
    Process { status: String, stderr: String },

    #[error("local model did not answer within {secs} seconds")]
    Timeout { secs: u64 },

    #[error("model produced an empty answer")]
    EmptyAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_audio_message_names_the_path() {
        let err = TranscribeError::AudioNotFound {
            path: Path::new("recordings/CapitalOfSudan.m4a").to_path_buf(),
        };
        assert!(err.to_string().contains("recordings/CapitalOfSudan.m4a"));
    }

    #[test]
    fn timeout_message_names_the_bound() {
        let err = AnswerError::Timeout { secs: 300 };
        assert!(err.to_string().contains("300"));
    }
}
