//! Local transcription using whisper.cpp via whisper-rs.
//!
//! Runs offline against a ggml model file (e.g. ggml-tiny.bin). The model
//! is loaded on every call; no warm cache is kept. Input must be a WAV
//! file already at 16kHz mono, since resampling is out of scope here.

use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::error::TranscribeError;

/// Sample rate whisper.cpp expects
pub(super) const WHISPER_SAMPLE_RATE: u32 = 16_000;

pub(super) fn transcribe(model_path: &Path, audio: &Path) -> Result<String, TranscribeError> {
    if !model_path.exists() {
        return Err(TranscribeError::ModelNotFound {
            path: model_path.to_path_buf(),
        });
    }

    let samples = read_wav_16k_mono(audio)?;

    let model_path = model_path
        .to_str()
        .ok_or_else(|| TranscribeError::Engine("model path is not valid UTF-8".to_string()))?;

    let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
        .map_err(|e| TranscribeError::Engine(format!("failed to load whisper model: {e}")))?;

    let mut state = ctx
        .create_state()
        .map_err(|e| TranscribeError::Engine(format!("failed to create whisper state: {e}")))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    state
        .full(params, &samples)
        .map_err(|e| TranscribeError::Engine(format!("inference failed: {e}")))?;

    let num_segments = state
        .full_n_segments()
        .map_err(|e| TranscribeError::Engine(format!("failed to read segments: {e}")))?;

    let mut text = String::new();
    for i in 0..num_segments {
        let segment = state
            .full_get_segment_text(i)
            .map_err(|e| TranscribeError::Engine(format!("failed to read segment {i}: {e}")))?;
        text.push_str(&segment);
    }

    Ok(text)
}

/// Read a WAV file into f32 samples, requiring 16kHz mono input.
pub(super) fn read_wav_16k_mono(path: &Path) -> Result<Vec<f32>, TranscribeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if extension.as_deref() != Some("wav") {
        return Err(TranscribeError::UnsupportedAudio(format!(
            "local transcription reads WAV files only, got: {}",
            path.display()
        )));
    }

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| TranscribeError::UnsupportedAudio(format!("failed to open WAV: {e}")))?;
    let spec = reader.spec();

    if spec.sample_rate != WHISPER_SAMPLE_RATE || spec.channels != 1 {
        return Err(TranscribeError::UnsupportedAudio(format!(
            "expected {WHISPER_SAMPLE_RATE} Hz mono WAV, got {} Hz with {} channel(s)",
            spec.sample_rate, spec.channels
        )));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TranscribeError::UnsupportedAudio(format!("bad float samples: {e}")))?,
        hound::SampleFormat::Int => {
            let max_val = (1u32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TranscribeError::UnsupportedAudio(format!("bad int samples: {e}")))?
        }
    };

    if samples.is_empty() {
        return Err(TranscribeError::UnsupportedAudio(
            "WAV file contains no samples".to_string(),
        ));
    }

    Ok(samples)
}
