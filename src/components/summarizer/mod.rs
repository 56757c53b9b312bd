use crate::components::Summarizer;
use crate::error::{summarizer_error, SyncResult};
use async_trait::async_trait;
use rig::completion::{Chat, Message};
use rig::providers::openai::Client as OpenAiClient;
use tracing::info;

const SYSTEM_PROMPT: &str =
    "Summarize this meeting for CRM entry including contact name, next step, and status.";

/// OpenAI-backed meeting summarizer
pub struct OpenAiSummarizer {
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    /// Summarize a transcript with the fixed CRM instruction
    async fn summarize(&self, transcript: &str) -> SyncResult<String> {
        let client = OpenAiClient::new(&self.api_key);

        let agent = client
            .agent(&self.model)
            .preamble(SYSTEM_PROMPT)
            .build();

        let response = agent
            .chat(transcript.to_string(), Vec::<Message>::new())
            .await
            .map_err(|e| summarizer_error(&format!("Chat completion failed: {}", e)))?;

        info!("Received summary from {}", self.model);

        Ok(response.trim().to_string())
    }
}
