pub mod models;
pub mod time;

pub use models::CalendarEvent;

use crate::components::google_auth::{ServiceAccountKey, TokenManager};
use crate::components::EventSource;
use crate::error::{google_calendar_error, SyncResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use models::EventsListResponse;
use reqwest::Client;
use url::Url;

/// Google Calendar v3 client scoped to one calendar
pub struct CalendarClient {
    client: Client,
    tokens: TokenManager,
    calendar_id: String,
}

impl CalendarClient {
    pub fn new(key: ServiceAccountKey, scope: String, calendar_id: String) -> Self {
        Self {
            client: Client::new(),
            tokens: TokenManager::new(key, scope),
            calendar_id,
        }
    }
}

#[async_trait]
impl EventSource for CalendarClient {
    /// Fetch single-instance events in the window, ordered by start time
    async fn fetch_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> SyncResult<Vec<CalendarEvent>> {
        let access_token = self.tokens.access_token().await?;

        let url_str = format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            self.calendar_id
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("timeMin", &time_min.to_rfc3339())
            .append_pair("timeMax", &time_max.to_rfc3339())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let response = self
            .client
            .get(url)
            .bearer_auth(&access_token)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: EventsListResponse = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        Ok(response_data.items.into_iter().map(Into::into).collect())
    }
}
