//! Injected configuration for the two pipeline stages.
//!
//! Credentials and model locations are supplied by the caller (CLI flags,
//! environment lookup at the entry point, test fixtures). The core never
//! reads ambient process state itself.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the hosted-endpoint credential.
///
/// Read by the CLI layer only; the value is injected into the configs below.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default hosted speech-recognition model
pub const DEFAULT_TRANSCRIBE_MODEL: &str = "whisper-1";

/// Default hosted chat-completion model
pub const DEFAULT_ANSWER_MODEL: &str = "gpt-4o-mini";

/// Default local LLM invocation (program + fixed arguments; the prompt is
/// appended as one additional argument)
pub const DEFAULT_LOCAL_LLM_COMMAND: &[&str] = &["ollama", "run", "mistral"];

/// Wall-clock bound on a local LLM invocation
pub const DEFAULT_LOCAL_LLM_TIMEOUT_SECS: u64 = 300;

/// Configuration for the transcription stage.
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// Credential for the hosted endpoint (required for remote mode)
    pub api_key: Option<String>,
    /// Hosted model identifier
    pub remote_model: String,
    /// Path to a whisper.cpp model file (required for local mode)
    pub whisper_model_path: Option<PathBuf>,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            remote_model: DEFAULT_TRANSCRIBE_MODEL.to_string(),
            whisper_model_path: None,
        }
    }
}

/// Configuration for the answering stage.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Credential for the hosted endpoint (required for remote mode)
    pub api_key: Option<String>,
    /// Hosted model identifier
    pub remote_model: String,
    /// Program and fixed arguments for local inference. The prompt is
    /// always passed as one extra argument, never through a shell.
    pub local_command: Vec<String>,
    /// Wall-clock bound on the local invocation
    pub timeout: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            remote_model: DEFAULT_ANSWER_MODEL.to_string(),
            local_command: DEFAULT_LOCAL_LLM_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timeout: Duration::from_secs(DEFAULT_LOCAL_LLM_TIMEOUT_SECS),
        }
    }
}
