//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. Besides logging the connection and setting the
//! activity, it starts the reminder scheduler the first time the bot becomes ready.
//! Later `ready` events after a reconnect leave the running scheduler alone.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{
    bot::notifier::DiscordNotifier, scheduler::reminders::start_scheduler, state::AppState,
};

const ACTIVITY: &str = "Revue Starlight Re LIVE";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state handed to the scheduler
/// - `scheduler_started` - Guard flag owned by the handler
/// - `ctx` - Discord context for setting activity status and building the notifier
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &AppState,
    scheduler_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing(ACTIVITY)));

    if scheduler_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Reminder scheduler already running");
        return;
    }

    let notifier = Arc::new(DiscordNotifier::new(ctx.http.clone(), ctx.cache.clone()));
    if let Err(e) = start_scheduler(state.clone(), notifier).await {
        tracing::error!("Failed to start reminder scheduler: {}", e);
        // Allow the next ready event to try again.
        scheduler_started.store(false, Ordering::SeqCst);
    }
}
