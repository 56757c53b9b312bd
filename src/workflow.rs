use crate::components::google_calendar::time::event_start;
use crate::components::{CalendarEvent, CrmRow, EventSource, RowSink, Summarizer, TranscriptSource};
use crate::error::SyncResult;
use chrono::{Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::{info, warn};

/// Trailing lookback window for calendar queries, in days
pub const SYNC_WINDOW_DAYS: i64 = 60;

/// Status written on every new CRM row
pub const ROW_STATUS_NEW: &str = "New";

/// Next step written on every new CRM row
pub const ROW_NEXT_STEP_PENDING: &str = "Pending GPT parse";

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern compiles");
    static ref KEYWORD_RE: Regex =
        Regex::new(r"(?i)investor|pitch|intro").expect("keyword pattern compiles");
}

/// Extract the first email-shaped substring from free text, empty when none
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Whether an event title marks an investor-related meeting
pub fn title_matches(title: &str) -> bool {
    KEYWORD_RE.is_match(title)
}

/// Map an event and its derived fields onto a CRM row.
///
/// Events with no parseable start leave date and time empty rather than
/// failing the row.
pub fn build_row(event: &CalendarEvent, email: &str, summary: &str) -> CrmRow {
    let (date, time) = match event_start(event) {
        Some(start) => (
            start.format("%Y-%m-%d").to_string(),
            start.format("%H:%M").to_string(),
        ),
        None => (String::new(), String::new()),
    };

    CrmRow {
        date,
        time,
        title: event.summary.clone().unwrap_or_default(),
        email: email.to_string(),
        summary: summary.to_string(),
        status: ROW_STATUS_NEW.to_string(),
        next_step: ROW_NEXT_STEP_PENDING.to_string(),
    }
}

/// Outcome of one sync invocation
#[derive(Debug, Clone, serde::Serialize)]
pub struct SyncReport {
    /// Number of retained events, equal to the number of rows appended
    pub events_synced: usize,
}

/// The sequential calendar-to-CRM sync pipeline.
///
/// Providers are injected behind narrow traits so tests can substitute
/// deterministic fakes for the live HTTP clients.
pub struct SyncWorkflow {
    events: Arc<dyn EventSource>,
    transcripts: Arc<dyn TranscriptSource>,
    summarizer: Arc<dyn Summarizer>,
    rows: Arc<dyn RowSink>,
}

impl SyncWorkflow {
    pub fn new(
        events: Arc<dyn EventSource>,
        transcripts: Arc<dyn TranscriptSource>,
        summarizer: Arc<dyn Summarizer>,
        rows: Arc<dyn RowSink>,
    ) -> Self {
        Self {
            events,
            transcripts,
            summarizer,
            rows,
        }
    }

    /// Run one sync pass over the trailing window.
    ///
    /// Each retained event produces exactly one appended row. Transcript
    /// lookup failures degrade to an empty transcript; calendar,
    /// summarizer, and sheet failures abort the run.
    pub async fn run(&self) -> SyncResult<SyncReport> {
        let time_max = Utc::now();
        let time_min = time_max - Duration::days(SYNC_WINDOW_DAYS);

        let events = self.events.fetch_events(time_min, time_max).await?;
        info!("Fetched {} calendar events", events.len());

        let retained: Vec<CalendarEvent> = events
            .into_iter()
            .filter(|e| title_matches(e.summary.as_deref().unwrap_or("")))
            .collect();
        info!("{} events match the meeting keyword filter", retained.len());

        for event in &retained {
            let email = extract_email(event.description.as_deref().unwrap_or(""));

            let transcript = if email.is_empty() {
                String::new()
            } else {
                match self.transcripts.fetch_transcript(&email).await {
                    Ok(transcript) => transcript,
                    Err(e) => {
                        warn!(
                            "Transcript lookup failed for {}, continuing without one: {:?}",
                            email, e
                        );
                        String::new()
                    }
                }
            };

            // An empty transcript has nothing to summarize
            let summary = if transcript.is_empty() {
                String::new()
            } else {
                self.summarizer.summarize(&transcript).await?
            };

            let row = build_row(event, &email, &summary);
            self.rows.append_row(&row).await?;
        }

        Ok(SyncReport {
            events_synced: retained.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_finds_address() {
        assert_eq!(extract_email("reach me at jane@x.co"), "jane@x.co");
    }

    #[test]
    fn test_extract_email_first_match_wins() {
        assert_eq!(
            extract_email("cc jane@x.co and bob@fund.vc"),
            "jane@x.co"
        );
    }

    #[test]
    fn test_extract_email_none() {
        assert_eq!(extract_email("call me after lunch"), "");
        assert_eq!(extract_email(""), "");
    }

    #[test]
    fn test_extract_email_subdomain_and_plus() {
        assert_eq!(
            extract_email("intro via jane.doe+crm@mail.fund.vc today"),
            "jane.doe+crm@mail.fund.vc"
        );
    }

    #[test]
    fn test_title_matches_keywords() {
        assert!(title_matches("Investor sync"));
        assert!(title_matches("Pitch practice"));
        assert!(title_matches("Intro call w/ Jane"));
    }

    #[test]
    fn test_title_matches_case_insensitive() {
        assert!(title_matches("INVESTOR UPDATE"));
        assert!(title_matches("pitch deck review"));
    }

    #[test]
    fn test_title_matches_substring() {
        // Keyword match is substring-based, so "introduction" qualifies
        assert!(title_matches("Introduction to the fund"));
    }

    #[test]
    fn test_title_does_not_match() {
        assert!(!title_matches("Team Standup"));
        assert!(!title_matches(""));
    }

    #[test]
    fn test_build_row_formats_start() {
        let event = CalendarEvent {
            id: "e1".to_string(),
            summary: Some("Investor pitch".to_string()),
            start_date_time: Some("2026-02-08T14:30:00Z".to_string()),
            ..Default::default()
        };

        let row = build_row(&event, "jane@x.co", "Went well.");
        assert_eq!(row.date, "2026-02-08");
        assert_eq!(row.time, "14:30");
        assert_eq!(row.title, "Investor pitch");
        assert_eq!(row.email, "jane@x.co");
        assert_eq!(row.summary, "Went well.");
        assert_eq!(row.status, ROW_STATUS_NEW);
        assert_eq!(row.next_step, ROW_NEXT_STEP_PENDING);
    }

    #[test]
    fn test_build_row_date_only_start() {
        let event = CalendarEvent {
            id: "e2".to_string(),
            summary: Some("Investor offsite".to_string()),
            start_date: Some("2026-02-08".to_string()),
            ..Default::default()
        };

        let row = build_row(&event, "", "");
        assert_eq!(row.date, "2026-02-08");
        assert_eq!(row.time, "00:00");
    }

    #[test]
    fn test_build_row_missing_start() {
        let event = CalendarEvent {
            id: "e3".to_string(),
            summary: Some("Pitch".to_string()),
            ..Default::default()
        };

        let row = build_row(&event, "", "");
        assert_eq!(row.date, "");
        assert_eq!(row.time, "");
    }
}
