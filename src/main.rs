mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting kuro");

    let state = startup::build_state(config, http_client).await;

    bot::start::start_bot(state).await
}
