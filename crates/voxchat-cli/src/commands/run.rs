//! Run command - transcribe an audio file, then answer the transcript.
//!
//! One request, strictly sequential: validate the path, transcribe, print
//! the transcript, answer, print the answer. Failures name the stage so
//! the user knows which half of the pipeline broke.

use anyhow::{Context, Result};
use std::path::Path;
use voxchat_core::{Responder, Transcriber};

use crate::app::RunOptions;

pub async fn run(audio_file_path: &str, options: RunOptions) -> Result<()> {
    let audio = Path::new(audio_file_path);
    if !audio.exists() {
        anyhow::bail!("audio file not found: {audio_file_path}");
    }

    let (transcriber_config, responder_config) = crate::app::load_configs(&options)?;

    let transcriber = Transcriber::new(transcriber_config);
    let transcript = transcriber
        .transcribe(audio, options.transcribe_mode)
        .await
        .context("transcription failed")?;

    println!("Transcript:\n{transcript}\n");

    let responder = Responder::new(responder_config);
    let answer = responder
        .answer(&transcript, options.answer_mode)
        .await
        .context("answering failed")?;

    println!("Answer:\n{answer}");

    Ok(())
}
