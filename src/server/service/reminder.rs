//! Daily birthday and event reminders.
//!
//! One tick reloads the game data and the servers file, then posts at most one birthday
//! announcement and one event announcement to every guild that configured the matching
//! channel. The scheduler decides when ticks happen; this module only decides what a
//! tick sends.

use chrono::{DateTime, Utc};

use crate::server::{
    bot::notifier::Notifier,
    data::{
        character::CharacterRepository, dress::DressRepository, enemy::EnemyRepository,
        event::EventRepository, server_config::ServerConfigStore,
    },
    error::AppError,
    model::{
        announcement::{role_mention, Announcement, MessageEmbed, RELIVE_RGB},
        character::CharacterRecord,
        event::{EventNotice, Milestone},
        guild_config::{ChannelBinding, ChannelKind},
    },
    service::event::EventService,
    util::date::{day_month, event_time},
};

pub struct ReminderService<'a> {
    characters: &'a CharacterRepository,
    events: &'a EventRepository,
    dresses: &'a DressRepository,
    enemies: &'a EnemyRepository,
    servers: &'a ServerConfigStore,
    notifier: &'a dyn Notifier,
}

impl<'a> ReminderService<'a> {
    /// Creates a new ReminderService instance.
    ///
    /// # Arguments
    /// - `characters` - Character cache, reloaded every tick
    /// - `events` - Event names and the current-events snapshot
    /// - `dresses` - Dress lookup for challenge revue names
    /// - `enemies` - Enemy lookup for score attack names
    /// - `servers` - Per-guild announcement channels
    /// - `notifier` - Guild list and message delivery
    pub fn new(
        characters: &'a CharacterRepository,
        events: &'a EventRepository,
        dresses: &'a DressRepository,
        enemies: &'a EnemyRepository,
        servers: &'a ServerConfigStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            characters,
            events,
            dresses,
            enemies,
            servers,
            notifier,
        }
    }

    /// Runs one reminder tick.
    ///
    /// Upstream failures leave nothing to announce for that tick. Guilds without a
    /// configuration or without the relevant channel are skipped with a warning.
    ///
    /// # Arguments
    /// - `now` - Reference time; "tomorrow" and "today" are UTC calendar dates
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of announcements sent
    /// - `Err(AppError)` - A send failed; announcements after it were not attempted
    pub async fn run_tick(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        self.events.reload_events().await;
        let notices = self.event_notices(now).await;

        self.characters.reload().await;
        let birthday = self.characters.get_character_birthday(&day_month(now)).await;

        self.servers.reload().await;
        let guild_ids = self.notifier.guilds().await;

        let mut sent = 0;

        if let Some(character) = &birthday {
            tracing::info!("Today is {}'s birthday", character.name);
            sent += self
                .deliver(&guild_ids, ChannelKind::Birthday, |guild_id, binding| {
                    birthday_announcement(guild_id, binding, character)
                })
                .await?;
        }

        if let Some((primary, rest)) = notices.split_first() {
            tracing::info!("{} events start or end tomorrow", notices.len());
            sent += self
                .deliver(&guild_ids, ChannelKind::Event, |guild_id, binding| {
                    event_announcement(guild_id, binding, primary, rest)
                })
                .await?;
        }

        Ok(sent)
    }

    /// Events starting or ending tomorrow, with names resolved.
    ///
    /// Names are only resolved when there is something to announce, since resolving
    /// costs one request per challenge and boss.
    async fn event_notices(&self, now: DateTime<Utc>) -> Vec<EventNotice> {
        let mut current = self.events.get_current_events().await;
        if current.notices(now).is_empty() {
            return Vec::new();
        }

        EventService::new(self.events, self.dresses, self.enemies)
            .resolve(&mut current)
            .await;
        current.notices(now)
    }

    async fn deliver<F>(
        &self,
        guild_ids: &[u64],
        kind: ChannelKind,
        build: F,
    ) -> Result<usize, AppError>
    where
        F: Fn(u64, &ChannelBinding) -> Announcement,
    {
        let mut sent = 0;

        for &guild_id in guild_ids {
            let Some(config) = self.servers.find_by_id(guild_id).await else {
                tracing::warn!(
                    "Guild {} has no configuration, skipping {} announcement",
                    guild_id,
                    kind
                );
                continue;
            };

            let Some(binding) = config.channel(kind) else {
                tracing::warn!(
                    "Guild {} has no {} channel, skipping {} announcement",
                    guild_id,
                    kind,
                    kind
                );
                continue;
            };

            self.notifier.send(&build(guild_id, binding)).await?;
            tracing::debug!(
                "Sent {} announcement to channel {} in guild {}",
                kind,
                binding.channel_id,
                guild_id
            );
            sent += 1;
        }

        Ok(sent)
    }
}

/// Builds the birthday announcement for one guild.
///
/// Detail fields are only added when the character was hydrated.
pub fn birthday_announcement(
    guild_id: u64,
    binding: &ChannelBinding,
    character: &CharacterRecord,
) -> Announcement {
    let mut embed = MessageEmbed::new(
        format!("Joyeux anniversaire, {}!", character.name),
        format!(
            "Today, {}, is {}'s birthday!",
            character.birthday.long_form(),
            character.name
        ),
        character.color,
    )
    .thumbnail(character.portrait_url.clone());

    for (name, value, inline) in character.profile_fields() {
        embed = embed.field(name, value, inline);
    }

    Announcement {
        guild_id,
        channel_id: binding.channel_id,
        content: role_mention(guild_id, binding.role_id),
        embed,
    }
}

/// Builds the event announcement for one guild.
///
/// `primary` is the highlighted event; `rest` is listed underneath.
pub fn event_announcement(
    guild_id: u64,
    binding: &ChannelBinding,
    primary: &EventNotice,
    rest: &[EventNotice],
) -> Announcement {
    let title = match primary.milestone {
        Milestone::Starting => format!("{} starts tomorrow!", primary.event.display_name()),
        Milestone::Ending => format!("{} ends tomorrow!", primary.event.display_name()),
    };

    let mut embed = MessageEmbed::new(title, notice_line(primary), RELIVE_RGB)
        .thumbnail(primary.event.icon.clone());

    if !rest.is_empty() {
        let also: String = rest
            .iter()
            .map(|notice| {
                format!(
                    ":white_small_square:{} - {}\n",
                    notice.event.display_name(),
                    notice_line(notice)
                )
            })
            .collect();
        embed = embed.field("Also tomorrow", also, false);
    }

    Announcement {
        guild_id,
        channel_id: binding.channel_id,
        content: role_mention(guild_id, binding.role_id),
        embed,
    }
}

fn notice_line(notice: &EventNotice) -> String {
    let when = notice
        .date()
        .map(event_time)
        .unwrap_or_else(|| "unknown".to_string());

    match notice.milestone {
        Milestone::Starting => format!("Starts {}", when),
        Milestone::Ending => format!("Ends {}", when),
    }
}
