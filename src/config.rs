use crate::error::{env_error, SyncResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default OAuth scope used for calendar reads
pub const DEFAULT_CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Default chat model for meeting summaries
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Main configuration structure for the sync service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service account email used for Google API access
    pub google_service_email: String,
    /// Service account private key (PEM)
    pub google_private_key: String,
    /// OAuth scope requested for calendar reads
    pub google_calendar_scope: String,
    /// Google Calendar ID to read events from
    pub google_calendar_id: String,
    /// Google Sheet ID acting as the CRM store
    pub google_sheet_id: String,
    /// A1 range the CRM rows are appended to
    pub sheet_range: String,
    /// Fireflies API key for transcript lookups
    pub fireflies_api_key: String,
    /// OpenAI API key for summaries
    pub openai_api_key: String,
    /// Chat model used for summaries
    pub openai_model: String,
    /// Shared secret required on /sync invocations
    pub cron_secret: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> SyncResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_service_email =
            env::var("GOOGLE_SERVICE_EMAIL").map_err(|_| env_error("GOOGLE_SERVICE_EMAIL"))?;
        // Deployment environments store the PEM with literal \n sequences
        let google_private_key = env::var("GOOGLE_PRIVATE_KEY")
            .map_err(|_| env_error("GOOGLE_PRIVATE_KEY"))?
            .replace("\\n", "\n");
        let google_sheet_id =
            env::var("GOOGLE_SHEET_ID").map_err(|_| env_error("GOOGLE_SHEET_ID"))?;
        let fireflies_api_key =
            env::var("FIREFLIES_API_KEY").map_err(|_| env_error("FIREFLIES_API_KEY"))?;
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| env_error("OPENAI_API_KEY"))?;
        let cron_secret = env::var("CRON_SECRET").map_err(|_| env_error("CRON_SECRET"))?;

        // Optional variables with defaults
        let google_calendar_scope = env::var("GOOGLE_CALENDAR_SCOPE")
            .unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_SCOPE));
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").unwrap_or_else(|_| String::from("primary"));
        let sheet_range = env::var("SHEET_RANGE").unwrap_or_else(|_| String::from("Sheet1!A1"));
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| String::from(DEFAULT_OPENAI_MODEL));

        let port = env::var("PORT")
            .unwrap_or_else(|_| String::from("3000"))
            .parse::<u16>()
            .map_err(|_| env_error("Invalid PORT format"))?;

        Ok(Config {
            google_service_email,
            google_private_key,
            google_calendar_scope,
            google_calendar_id,
            google_sheet_id,
            sheet_range,
            fireflies_api_key,
            openai_api_key,
            openai_model,
            cron_secret,
            port,
        })
    }
}
