use super::models::CalendarEvent;
use chrono::{DateTime, NaiveDate, Utc};

/// Get the event start as a UTC instant.
///
/// Timed events carry an RFC 3339 dateTime; all-day events carry a
/// date-only string treated as midnight UTC. Returns None for events with
/// no parseable start, so callers can degrade instead of failing the row.
pub fn event_start(event: &CalendarEvent) -> Option<DateTime<Utc>> {
    if let Some(start_time) = &event.start_date_time {
        DateTime::parse_from_rfc3339(start_time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    } else if let Some(start_date) = &event.start_date {
        NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_event_start_rfc3339() {
        let event = CalendarEvent {
            start_date_time: Some("2026-02-08T09:00:00-05:00".to_string()),
            ..Default::default()
        };
        let dt = event_start(&event).unwrap();
        assert_eq!(dt.hour(), 14); // 9 AM EST = 14:00 UTC
    }

    #[test]
    fn test_event_start_date_only() {
        let event = CalendarEvent {
            start_date: Some("2026-02-08".to_string()),
            ..Default::default()
        };
        let dt = event_start(&event).unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(
            dt.date_naive(),
            NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
        );
    }

    #[test]
    fn test_event_start_missing() {
        let event = CalendarEvent::default();
        assert!(event_start(&event).is_none());
    }

    #[test]
    fn test_event_start_unparseable() {
        let event = CalendarEvent {
            start_date_time: Some("next tuesday".to_string()),
            ..Default::default()
        };
        assert!(event_start(&event).is_none());
    }
}
