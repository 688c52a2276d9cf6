use async_trait::async_trait;

use crate::error::LlmResult;

/// Backend-agnostic interface for the advisor chatbot.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Answer a single user question
    async fn ask(&self, query: &str) -> LlmResult<String>;

    fn backend_name(&self) -> &'static str;
}
