pub mod models;

use crate::components::TranscriptSource;
use crate::error::{transcript_error, SyncResult};
use async_trait::async_trait;
use models::MeetingsResponse;
use reqwest::Client;
use url::Url;

const MEETINGS_URL: &str = "https://api.fireflies.ai/api/v1/meetings";

/// Fireflies.ai client for transcript lookups
pub struct FirefliesClient {
    client: Client,
    api_key: String,
}

impl FirefliesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl TranscriptSource for FirefliesClient {
    /// Fetch the most recent meeting transcript for a contact email.
    ///
    /// A contact with no recorded meetings yields an empty transcript, not
    /// an error.
    async fn fetch_transcript(&self, email: &str) -> SyncResult<String> {
        let mut url = Url::parse(MEETINGS_URL)
            .map_err(|e| transcript_error(&format!("Failed to parse URL: {}", e)))?;
        url.query_pairs_mut().append_pair("email", email);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| transcript_error(&format!("Failed to fetch meetings: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(transcript_error(&format!(
                "Failed to fetch meetings: HTTP {} - {}",
                status, error_body
            )));
        }

        let data: MeetingsResponse = response
            .json()
            .await
            .map_err(|e| transcript_error(&format!("Failed to parse meetings response: {}", e)))?;

        Ok(data
            .results
            .into_iter()
            .next()
            .and_then(|m| m.transcript)
            .unwrap_or_default())
    }
}
