use crm_autopilot::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting CRM Autopilot");

    // Load configuration
    let config = startup::load_config()?;

    // Serve the sync endpoint
    startup::run_server(config).await
}
