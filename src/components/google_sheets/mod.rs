pub mod models;

pub use models::CrmRow;

use crate::components::google_auth::{ServiceAccountKey, TokenManager};
use crate::components::RowSink;
use crate::error::{google_sheets_error, SyncResult};
use async_trait::async_trait;
use models::ValueRange;
use reqwest::Client;
use tracing::info;
use url::Url;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Google Sheets v4 client appending rows to one range
pub struct SheetsClient {
    client: Client,
    tokens: TokenManager,
    sheet_id: String,
    range: String,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey, sheet_id: String, range: String) -> Self {
        Self {
            client: Client::new(),
            tokens: TokenManager::new(key, SHEETS_SCOPE.to_string()),
            sheet_id,
            range,
        }
    }
}

#[async_trait]
impl RowSink for SheetsClient {
    /// Append one row below the configured range
    async fn append_row(&self, row: &CrmRow) -> SyncResult<()> {
        let access_token = self.tokens.access_token().await?;

        let url_str = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}:append",
            self.sheet_id, self.range
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| google_sheets_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let body = ValueRange {
            values: vec![row.to_cells()],
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| google_sheets_error(&format!("Failed to append row: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_sheets_error(&format!(
                "Failed to append row: HTTP {} - {}",
                status, error_body
            )));
        }

        info!("Appended CRM row for \"{}\"", row.title);

        Ok(())
    }
}
