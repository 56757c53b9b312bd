use crate::components::google_auth::ServiceAccountKey;
use crate::components::{CalendarClient, FirefliesClient, OpenAiSummarizer, SheetsClient};
use crate::config::Config;
use crate::error::Error;
use crate::server::{router, AppState};
use crate::shutdown;
use crate::workflow::SyncWorkflow;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(config)),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Wire the live providers into the workflow and serve the sync endpoint
pub async fn run_server(config: Arc<Config>) -> miette::Result<()> {
    let key = ServiceAccountKey {
        client_email: config.google_service_email.clone(),
        private_key: config.google_private_key.clone(),
    };

    let events = Arc::new(CalendarClient::new(
        key.clone(),
        config.google_calendar_scope.clone(),
        config.google_calendar_id.clone(),
    ));
    let transcripts = Arc::new(FirefliesClient::new(config.fireflies_api_key.clone()));
    let summarizer = Arc::new(OpenAiSummarizer::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    ));
    let rows = Arc::new(SheetsClient::new(
        key,
        config.google_sheet_id.clone(),
        config.sheet_range.clone(),
    ));

    let workflow = Arc::new(SyncWorkflow::new(events, transcripts, summarizer, rows));

    let state = AppState {
        workflow,
        cron_secret: config.cron_secret.clone(),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    Ok(())
}
