use serde::Deserialize;

/// Simplified calendar event representation
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct CalendarEvent {
    pub id: String,
    /// Event title
    pub summary: Option<String>,
    pub description: Option<String>,
    pub start_date_time: Option<String>,
    pub start_date: Option<String>,
    pub end_date_time: Option<String>,
    pub end_date: Option<String>,
}

/// Raw events-list response from the Calendar API
#[derive(Debug, Deserialize)]
pub(super) struct EventsListResponse {
    #[serde(default)]
    pub items: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub start: Option<EventDateTime>,
    pub end: Option<EventDateTime>,
}

/// A Calendar API start/end marker: dateTime for timed events, date for all-day
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EventDateTime {
    pub date_time: Option<String>,
    pub date: Option<String>,
}

impl From<RawEvent> for CalendarEvent {
    fn from(raw: RawEvent) -> Self {
        CalendarEvent {
            id: raw.id,
            summary: raw.summary,
            description: raw.description,
            start_date_time: raw.start.as_ref().and_then(|s| s.date_time.clone()),
            start_date: raw.start.as_ref().and_then(|s| s.date.clone()),
            end_date_time: raw.end.as_ref().and_then(|e| e.date_time.clone()),
            end_date: raw.end.as_ref().and_then(|e| e.date.clone()),
        }
    }
}
