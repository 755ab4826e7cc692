use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::notifier::Notifier, error::AppError, service::reminder::ReminderService,
    state::AppState,
};

/// Starts the reminder scheduler
///
/// Runs one tick right away and then one every `reminder_interval_hours`. Each tick
/// announces today's birthday and tomorrow's event starts and ends.
///
/// # Arguments
/// - `state`: Shared application state
/// - `notifier`: Guild list and message delivery for announcements
pub async fn start_scheduler(
    state: AppState,
    notifier: Arc<dyn Notifier>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let interval = state.config.reminder_interval()?;

    let first_state = state.clone();
    let first_notifier = notifier.clone();
    let first = Job::new_one_shot_async(Duration::ZERO, move |_uuid, _lock| {
        let state = first_state.clone();
        let notifier = first_notifier.clone();

        Box::pin(async move {
            process_reminders(&state, notifier.as_ref()).await;
        })
    })?;

    let repeated = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = state.clone();
        let notifier = notifier.clone();

        Box::pin(async move {
            process_reminders(&state, notifier.as_ref()).await;
        })
    })?;

    scheduler.add(first).await?;
    scheduler.add(repeated).await?;
    scheduler.start().await?;

    tracing::info!(
        "Reminder scheduler started, running every {} hours",
        interval.as_secs() / 3600
    );

    Ok(())
}

/// Runs one reminder tick and logs its outcome
async fn process_reminders(state: &AppState, notifier: &dyn Notifier) {
    let service = ReminderService::new(
        &state.characters,
        &state.events,
        &state.dresses,
        &state.enemies,
        &state.servers,
        notifier,
    );

    match service.run_tick(Utc::now()).await {
        Ok(sent) => tracing::info!("Reminder tick sent {} announcements", sent),
        Err(e) => tracing::error!("Error processing reminders: {}", e),
    }
}
