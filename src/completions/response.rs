//! Chat completions response payloads.
//!
//! Only the fields the gateway reads are required; the rest are optional so
//! that OpenAI-compatible providers with slightly different shapes still
//! decode.

use serde::Deserialize;

use crate::core::LlmError;

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub index: Option<u32>,
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub role: Option<String>,
    pub content: Option<String>,
    pub refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// Pull the completion text out of the first choice, untouched.
pub(crate) fn extract_completion_text(res: ChatCompletionResponse) -> Result<String, LlmError> {
    let choice = res.choices.into_iter().next().ok_or_else(|| LlmError::Parse {
        message: "No choices in response".to_string(),
        source: "empty `choices` array".into(),
    })?;

    if let Some(refusal) = choice.message.refusal {
        return Err(LlmError::Api {
            message: format!("Model refused: {refusal}"),
            status_code: None,
            source: None,
        });
    }

    choice.message.content.ok_or_else(|| LlmError::Parse {
        message: format!(
            "No content in message (finish_reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ),
        source: "missing `message.content`".into(),
    })
}
