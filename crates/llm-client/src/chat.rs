use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{LlmError, LlmResult};
use crate::provider::ChatProvider;
use crate::LlmConfig;

pub const FINANCIAL_ADVISOR_PROMPT: &str = "You are an expert financial advisor. Provide clear, professional, \
and actionable financial advice. Always:
- Use simple, understandable language
- Provide practical recommendations
- Cite general financial principles
- Avoid specific investment recommendations without disclaimers
- Prioritize user's financial education";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-completion client for the financial advisor chatbot
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> LlmResult<Self> {
        Self::new(LlmConfig::from_env()?)
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Send one question with the advisor system prompt and return the
    /// first answer
    pub async fn complete(&self, query: &str) -> LlmResult<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LlmError::EmptyQuery);
        }

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::new("system", FINANCIAL_ADVISOR_PROMPT),
                ChatMessage::new("user", query),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(%status, "chat completion request rejected");
            return Err(LlmError::ServiceUnavailable(format!("Status: {}", status)));
        }

        let body = response.json::<ChatCompletionResponse>().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("no choices returned".to_string()))
    }
}

#[async_trait]
impl ChatProvider for ChatClient {
    async fn ask(&self, query: &str) -> LlmResult<String> {
        self.complete(query).await
    }

    fn backend_name(&self) -> &'static str {
        "openai"
    }
}
