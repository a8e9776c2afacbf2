//! Answering stage: text prompt in, model answer out.
//!
//! Two engines behind one call:
//! - Remote: single-turn chat completion against a hosted endpoint, the
//!   prompt carried as one system-role message.
//! - Local: an out-of-process model runner (ollama by default) invoked
//!   with an argument vector and a hard wall-clock bound.

mod local;
mod remote;

use crate::config::ResponderConfig;
use crate::error::AnswerError;
use crate::mode::ExecutionMode;

/// Converts a text prompt into a text answer via the configured engine.
pub struct Responder {
    config: ResponderConfig,
    client: reqwest::Client,
}

impl Responder {
    pub fn new(config: ResponderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Answer a prompt.
    ///
    /// The prompt must be non-empty. Returns the model's answer (trimmed),
    /// never an empty success value. No retry on failure.
    pub async fn answer(
        &self,
        prompt: &str,
        mode: ExecutionMode,
    ) -> Result<String, AnswerError> {
        if prompt.trim().is_empty() {
            return Err(AnswerError::EmptyPrompt);
        }

        crate::verbose!("answering {} chars ({mode})", prompt.len());

        let text = match mode {
            ExecutionMode::Remote => {
                let api_key =
                    self.config
                        .api_key
                        .as_deref()
                        .ok_or(AnswerError::MissingApiKey {
                            env: crate::config::OPENAI_API_KEY_ENV,
                        })?;
                remote::answer(&self.client, api_key, &self.config.remote_model, prompt).await?
            }
            ExecutionMode::Local => {
                local::answer(&self.config.local_command, self.config.timeout, prompt).await?
            }
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(AnswerError::EmptyAnswer);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let responder = Responder::new(ResponderConfig::default());
        let err = responder.answer("   ", ExecutionMode::Remote).await.unwrap_err();
        assert!(matches!(err, AnswerError::EmptyPrompt));
    }

    #[tokio::test]
    async fn remote_without_key_fails_before_any_network() {
        let responder = Responder::new(ResponderConfig::default());
        let err = responder
            .answer("What is the capital of Sudan?", ExecutionMode::Remote)
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerError::MissingApiKey { .. }));
    }
}
