//! Hosted chat-completion endpoint.
//!
//! Single-turn request: no conversation history, no streaming. The prompt
//! travels as one system-role message and the first choice's content is
//! the answer.

use serde::Deserialize;
use std::time::Duration;

use crate::error::AnswerError;

const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

pub(super) async fn answer(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, AnswerError> {
    let response = client
        .post(CHAT_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&serde_json::json!({
            "model": model,
            "messages": [
                {"role": "system", "content": prompt}
            ]
        }))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AnswerError::Api { status, body });
    }

    let body = response.text().await?;
    let parsed: ChatResponse = serde_json::from_str(&body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(AnswerError::NoChoices)
}
