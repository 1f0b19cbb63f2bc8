use std::error::Error;

use ai_stylist_service::telemetry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file, if present. Production
    // deploys configure the process environment directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info"))
        .with(telemetry::fmt_layer())
        .init();

    tracing::info!("starting backend");

    api::start().await?;

    Ok(())
}
