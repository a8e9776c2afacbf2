//! Transcription stage: audio file in, transcript text out.
//!
//! Two engines behind one call:
//! - Remote: hosted speech-recognition endpoint (OpenAI-compatible
//!   multipart upload), any audio format the endpoint accepts.
//! - Local: whisper.cpp model loaded fresh per call, WAV 16kHz mono input.

#[cfg(feature = "local-whisper")]
mod local;
mod remote;

use std::path::Path;

use crate::config::TranscriberConfig;
use crate::error::TranscribeError;
use crate::mode::ExecutionMode;

/// Converts an audio file into text via the configured engine.
pub struct Transcriber {
    config: TranscriberConfig,
    client: reqwest::Client,
}

impl Transcriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Transcribe an audio file.
    ///
    /// The file must exist and be readable; no format validation beyond
    /// what the underlying engine requires. Returns the engine's text
    /// verbatim (trimmed), never an empty success value.
    pub async fn transcribe(
        &self,
        audio: &Path,
        mode: ExecutionMode,
    ) -> Result<String, TranscribeError> {
        if !audio.exists() {
            return Err(TranscribeError::AudioNotFound {
                path: audio.to_path_buf(),
            });
        }

        crate::verbose!("transcribing {} ({mode})", audio.display());

        let text = match mode {
            ExecutionMode::Remote => {
                let api_key =
                    self.config
                        .api_key
                        .as_deref()
                        .ok_or(TranscribeError::MissingApiKey {
                            env: crate::config::OPENAI_API_KEY_ENV,
                        })?;
                remote::transcribe(
                    &self.client,
                    api_key,
                    &self.config.remote_model,
                    audio,
                )
                .await?
            }
            ExecutionMode::Local => self.transcribe_local(audio).await?,
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(TranscribeError::EmptyTranscript);
        }
        Ok(text)
    }

    #[cfg(feature = "local-whisper")]
    async fn transcribe_local(&self, audio: &Path) -> Result<String, TranscribeError> {
        let model_path = self
            .config
            .whisper_model_path
            .clone()
            .ok_or(TranscribeError::MissingModelPath)?;
        let audio = audio.to_path_buf();

        // CPU-bound inference off the async runtime
        tokio::task::spawn_blocking(move || local::transcribe(&model_path, &audio))
            .await
            .map_err(|e| TranscribeError::Engine(format!("transcription task panicked: {e}")))?
    }

    #[cfg(not(feature = "local-whisper"))]
    async fn transcribe_local(&self, _audio: &Path) -> Result<String, TranscribeError> {
        Err(TranscribeError::Engine(
            "this build does not include local transcription (enable the local-whisper feature)"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_fails_with_path_in_message() {
        let transcriber = Transcriber::new(TranscriberConfig::default());
        let err = transcriber
            .transcribe(Path::new("no/such/recording.wav"), ExecutionMode::Remote)
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::AudioNotFound { .. }));
        assert!(err.to_string().contains("no/such/recording.wav"));
    }

    #[tokio::test]
    async fn remote_without_key_fails_before_any_network() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let transcriber = Transcriber::new(TranscriberConfig::default());
        let err = transcriber
            .transcribe(file.path(), ExecutionMode::Remote)
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::MissingApiKey { .. }));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[cfg(feature = "local-whisper")]
    #[tokio::test]
    async fn local_without_model_path_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let transcriber = Transcriber::new(TranscriberConfig::default());
        let err = transcriber
            .transcribe(file.path(), ExecutionMode::Local)
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::MissingModelPath));
    }
}
