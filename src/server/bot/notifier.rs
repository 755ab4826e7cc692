//! Outbound side of the reminder scheduler.
//!
//! The reminder service only needs to know which guilds the bot is in and how to post an
//! announcement. `DiscordNotifier` answers both from the Serenity cache and HTTP client;
//! tests use a recording implementation instead.

use std::sync::Arc;

use serenity::{
    all::{Cache, ChannelId, Http},
    async_trait,
};

use crate::server::{
    bot::embed::build_announcement, error::AppError, model::announcement::Announcement,
};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// IDs of every guild the bot is currently a member of.
    async fn guilds(&self) -> Vec<u64>;

    /// Posts `announcement` to its channel.
    async fn send(&self, announcement: &Announcement) -> Result<(), AppError>;
}

pub struct DiscordNotifier {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn guilds(&self) -> Vec<u64> {
        self.cache.guilds().into_iter().map(|id| id.get()).collect()
    }

    async fn send(&self, announcement: &Announcement) -> Result<(), AppError> {
        if announcement.channel_id == 0 {
            return Err(AppError::NotFound(format!(
                "Guild {} has no valid announcement channel",
                announcement.guild_id
            )));
        }

        let channel_id = ChannelId::new(announcement.channel_id);
        channel_id
            .send_message(&self.http, build_announcement(announcement))
            .await?;

        Ok(())
    }
}
