//! Action handlers for the two-button web front end.
//!
//! The front end owns widgets and uploads; these handlers own the strings.
//! Each button click maps to one call here, and every outcome (including
//! failure) comes back as display text so the page never crashes.

use std::path::Path;

use crate::mode::ExecutionMode;
use crate::respond::Responder;
use crate::transcribe::Transcriber;

/// Shown when the transcribe button is pressed with no upload
pub const NO_AUDIO_PLACEHOLDER: &str = "No audio file uploaded";

/// Shown when the answer button is pressed without a usable transcript
pub const TRANSCRIBE_FIRST: &str = "Please transcribe an audio file first.";

/// Prefix marking an inert error string
pub const ERROR_MARKER: &str = "Error:";

/// Whether a transcript box value can be fed to the answering stage.
///
/// Placeholders and error strings are display text, not prompts.
pub fn is_actionable_transcript(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text != NO_AUDIO_PLACEHOLDER && !text.starts_with(ERROR_MARKER)
}

/// "Transcribe audio" button: uploaded file in, transcript (or inert
/// message) out.
pub async fn transcribe_action(
    transcriber: &Transcriber,
    mode: ExecutionMode,
    audio: Option<&Path>,
) -> String {
    let Some(audio) = audio else {
        return NO_AUDIO_PLACEHOLDER.to_string();
    };

    match transcriber.transcribe(audio, mode).await {
        Ok(text) => text,
        Err(e) => format!("{ERROR_MARKER} Could not transcribe the audio file. ({e})"),
    }
}

/// "Generate answer" button: transcript box value in, answer (or inert
/// message) out. Never touches the model when the input is a placeholder
/// or an error string.
pub async fn answer_action(responder: &Responder, mode: ExecutionMode, transcript: &str) -> String {
    if !is_actionable_transcript(transcript) {
        return TRANSCRIBE_FIRST.to_string();
    }

    match responder.answer(transcript, mode).await {
        Ok(text) => text,
        Err(e) => format!("{ERROR_MARKER} Could not generate AI response. ({e})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResponderConfig, TranscriberConfig};

    #[test]
    fn placeholders_and_errors_are_not_actionable() {
        assert!(!is_actionable_transcript(""));
        assert!(!is_actionable_transcript("   "));
        assert!(!is_actionable_transcript(NO_AUDIO_PLACEHOLDER));
        assert!(!is_actionable_transcript(
            "Error: Could not transcribe the audio file."
        ));
        assert!(is_actionable_transcript("What is the capital of Sudan?"));
    }

    #[tokio::test]
    async fn no_upload_yields_the_literal_placeholder() {
        let transcriber = Transcriber::new(TranscriberConfig::default());
        let out = transcribe_action(&transcriber, ExecutionMode::Remote, None).await;
        assert_eq!(out, NO_AUDIO_PLACEHOLDER);
    }

    #[tokio::test]
    async fn answering_on_the_placeholder_never_invokes_the_responder() {
        // A responder whose local command would blow up if ever spawned;
        // the guard must return before that happens.
        let config = ResponderConfig {
            local_command: vec!["voxchat-must-not-run".to_string()],
            ..ResponderConfig::default()
        };
        let responder = Responder::new(config);

        let out = answer_action(&responder, ExecutionMode::Local, NO_AUDIO_PLACEHOLDER).await;
        assert_eq!(out, TRANSCRIBE_FIRST);

        let out = answer_action(&responder, ExecutionMode::Local, "Error: upstream failed").await;
        assert_eq!(out, TRANSCRIBE_FIRST);
    }

    #[tokio::test]
    async fn transcribe_failure_comes_back_as_an_error_string() {
        let transcriber = Transcriber::new(TranscriberConfig::default());
        let out = transcribe_action(
            &transcriber,
            ExecutionMode::Remote,
            Some(Path::new("missing.wav")),
        )
        .await;
        assert!(out.starts_with(ERROR_MARKER));
        assert!(!is_actionable_transcript(&out));
    }
}
