use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, error::AppError, state::AppState};

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until the connection is closed. The
/// reminder scheduler is started from the `ready` handler.
///
/// # Arguments
/// - `state` - Shared application state, including the bot token
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError::DiscordErr)` if bot initialization or the connection fails
pub async fn start_bot(state: AppState) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
