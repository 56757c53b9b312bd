use serde::Deserialize;

/// Meetings lookup response, most recent first
#[derive(Debug, Deserialize)]
pub struct MeetingsResponse {
    #[serde(default)]
    pub results: Vec<MeetingRecord>,
}

#[derive(Debug, Deserialize)]
pub struct MeetingRecord {
    #[serde(default)]
    pub transcript: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meetings_response_with_transcript() {
        let json = r#"{
            "results": [
                {"transcript": "We discussed the seed round."},
                {"transcript": "Older meeting."}
            ]
        }"#;

        let resp: MeetingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(
            resp.results[0].transcript.as_deref(),
            Some("We discussed the seed round.")
        );
    }

    #[test]
    fn test_meetings_response_null_transcript() {
        let resp: MeetingsResponse =
            serde_json::from_str(r#"{"results": [{"transcript": null}]}"#).unwrap();
        assert!(resp.results[0].transcript.is_none());
    }

    #[test]
    fn test_meetings_response_empty() {
        let resp: MeetingsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }
}
