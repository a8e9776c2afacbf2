//! Configuration assembly for a run: CLI flags first, environment second.
//!
//! All ambient lookups happen here, at the entry point. The core receives
//! finished config values and never touches the environment itself.

use anyhow::{Result, bail};
use std::path::PathBuf;
use std::time::Duration;
use voxchat_core::{
    ExecutionMode, OPENAI_API_KEY_ENV, ResponderConfig, TranscriberConfig,
};

/// Env var naming the whisper.cpp model file for local transcription
pub const WHISPER_MODEL_ENV: &str = "VOXCHAT_WHISPER_MODEL";

/// Env var naming the local LLM invocation (space-separated argv prefix)
pub const LLM_COMMAND_ENV: &str = "VOXCHAT_LLM_COMMAND";

/// Flags collected from the `run` subcommand
pub struct RunOptions {
    pub transcribe_mode: ExecutionMode,
    pub answer_mode: ExecutionMode,
    pub whisper_model: Option<String>,
    pub llm_command: Option<String>,
    pub timeout_secs: u64,
}

/// Build both stage configs, validating only what the selected modes need.
pub fn load_configs(options: &RunOptions) -> Result<(TranscriberConfig, ResponderConfig)> {
    let api_key = std::env::var(OPENAI_API_KEY_ENV).ok();

    if api_key.is_none()
        && (options.transcribe_mode == ExecutionMode::Remote
            || options.answer_mode == ExecutionMode::Remote)
    {
        bail!(
            "no API key configured for remote mode.\n\
             Set the {OPENAI_API_KEY_ENV} environment variable (or put it in a .env file),\n\
             or select --transcribe-mode local / --answer-mode local."
        );
    }

    let whisper_model = options
        .whisper_model
        .clone()
        .or_else(|| std::env::var(WHISPER_MODEL_ENV).ok())
        .map(PathBuf::from);

    if whisper_model.is_none() && options.transcribe_mode == ExecutionMode::Local {
        bail!(
            "no whisper model configured for local transcription.\n\
             Pass --whisper-model <path> or set {WHISPER_MODEL_ENV}.\n\
             Models: https://huggingface.co/ggerganov/whisper.cpp/tree/main"
        );
    }

    let transcriber = TranscriberConfig {
        api_key: api_key.clone(),
        whisper_model_path: whisper_model,
        ..TranscriberConfig::default()
    };

    let mut responder = ResponderConfig {
        api_key,
        timeout: Duration::from_secs(options.timeout_secs),
        ..ResponderConfig::default()
    };
    if let Some(command) = options
        .llm_command
        .clone()
        .or_else(|| std::env::var(LLM_COMMAND_ENV).ok())
    {
        let parts: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        if parts.is_empty() {
            bail!("--llm-command must name a program, e.g. \"ollama run mistral\"");
        }
        responder.local_command = parts;
    }

    Ok((transcriber, responder))
}
