//! OpenAI-compatible chat completion provider.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commit::prompt::build_subject_prompt;
use crate::config::{API_KEY_ENV_VAR, Config};
use crate::error::LlmError;
use crate::llm::router::SubjectProvider;
use crate::llm::transport::HttpTransport;

/// Registry identifier.
pub const PROVIDER_ID: &str = "openai";

/// Sampling temperature: low, for predictable conventional phrasing.
const TEMPERATURE: f32 = 0.2;

/// Token budget, enough for one subject line.
const MAX_TOKENS: u32 = 120;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Provider calling `POST {api_base}/chat/completions`.
pub struct OpenAiProvider {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.api_base),
        }
    }
}

impl SubjectProvider for OpenAiProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn generate_subject(&self, diff: &str, model: &str, style: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential(API_KEY_ENV_VAR))?;

        let prompt = build_subject_prompt(diff, style);
        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| LlmError::MalformedResponse(format!("could not encode request: {e}")))?;

        debug!("POST {} (model {})", self.endpoint, model);
        let response = self
            .transport
            .post_json(&self.endpoint, api_key, &body)
            .map_err(|source| LlmError::Transport {
                transport: self.transport.name(),
                source,
            })?;

        if !response.is_success() {
            return Err(LlmError::ProviderHttp {
                status: response.status,
            });
        }

        parse_chat_response(&response.body)
    }
}

/// Extract the first choice's message content.
fn parse_chat_response(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_string()))
}
