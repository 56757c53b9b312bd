use crate::error::SyncResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// Export components
pub mod fireflies;
pub mod google_auth;
pub mod google_calendar;
pub mod google_sheets;
pub mod summarizer;

// Re-export the HTTP-backed clients
pub use fireflies::FirefliesClient;
pub use google_calendar::{CalendarClient, CalendarEvent};
pub use google_sheets::{CrmRow, SheetsClient};
pub use summarizer::OpenAiSummarizer;

/// Source of calendar events for a time window
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch events between the two instants, ordered by start time
    async fn fetch_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> SyncResult<Vec<CalendarEvent>>;
}

/// Source of meeting transcripts keyed by contact email
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the most recent transcript for a contact, empty when none exists
    async fn fetch_transcript(&self, email: &str) -> SyncResult<String>;
}

/// Language-model summarization of a meeting transcript
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a CRM-ready summary of the transcript
    async fn summarize(&self, transcript: &str) -> SyncResult<String>;
}

/// Append-only sink for CRM rows
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Append one row to the store
    async fn append_row(&self, row: &CrmRow) -> SyncResult<()>;
}
