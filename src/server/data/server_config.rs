//! Server configuration store.
//!
//! Keeps every guild's announcement channels in memory and mirrors them to a single JSON
//! file, which is rewritten in full on every change. The store is shared between the
//! message handler and the reminder scheduler.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use entity::server::ServerEntry;
use tokio::sync::RwLock;

use crate::server::{
    error::AppError,
    model::guild_config::{ChannelBinding, ChannelKind, GuildConfig},
};

pub struct ServerConfigStore {
    path: PathBuf,
    guilds: RwLock<Vec<GuildConfig>>,
}

impl ServerConfigStore {
    /// Opens the store backed by `path` and loads it.
    ///
    /// # Arguments
    /// - `path` - Location of the servers file; it need not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let guilds = Self::load(&path).await;

        Self {
            path,
            guilds: RwLock::new(guilds),
        }
    }

    /// Reads the servers file.
    ///
    /// A missing file is a fresh deployment and yields an empty list. An unreadable or
    /// invalid file also yields an empty list, with the failure logged at error level.
    pub async fn load(path: &Path) -> Vec<GuildConfig> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No server configuration found at {}, starting empty",
                    path.display()
                );
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(
                    "Failed to read server configuration {}: {}",
                    path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<ServerEntry>>(&bytes) {
            Ok(entries) => {
                tracing::debug!("Loaded configuration for {} servers", entries.len());
                entries.into_iter().map(GuildConfig::from_entity).collect()
            }
            Err(e) => {
                tracing::error!(
                    "Invalid server configuration {}: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    pub async fn find_by_id(&self, guild_id: u64) -> Option<GuildConfig> {
        self.guilds
            .read()
            .await
            .iter()
            .find(|guild| guild.guild_id == guild_id)
            .cloned()
    }

    /// Snapshot of every configured guild.
    pub async fn all(&self) -> Vec<GuildConfig> {
        self.guilds.read().await.clone()
    }

    /// Binds the `kind` announcement channel of a guild and persists the whole store.
    ///
    /// Creates the guild on first configuration. An existing guild keeps its stored name
    /// and its other channel binding. If the file cannot be written the change is kept in
    /// memory and the failure logged.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `guild_name` - Guild name, only used when the guild is new
    /// - `channel_id` - Announcement channel ID
    /// - `channel_name` - Announcement channel name
    /// - `kind` - Which binding to replace
    /// - `role_id` - Role to mention in announcements
    ///
    /// # Returns
    /// - `GuildConfig` - The guild configuration after the change
    pub async fn upsert_channel(
        &self,
        guild_id: u64,
        guild_name: &str,
        channel_id: u64,
        channel_name: &str,
        kind: ChannelKind,
        role_id: u64,
    ) -> GuildConfig {
        let mut guilds = self.guilds.write().await;

        let index = match guilds.iter().position(|guild| guild.guild_id == guild_id) {
            Some(index) => index,
            None => {
                guilds.push(GuildConfig::new(guild_id, guild_name));
                guilds.len() - 1
            }
        };

        guilds[index].set_channel(
            kind,
            ChannelBinding {
                channel_id,
                channel_name: channel_name.to_string(),
                role_id,
            },
        );
        let updated = guilds[index].clone();

        // Held across the write so concurrent upserts reach the file in order.
        if let Err(e) = self.persist(&guilds).await {
            tracing::error!(
                "Failed to save server configuration {}: {}",
                self.path.display(),
                e
            );
        }

        updated
    }

    /// Replaces the in-memory configuration with the file contents, discarding unsaved
    /// changes.
    pub async fn reload(&self) {
        let guilds = Self::load(&self.path).await;
        *self.guilds.write().await = guilds;
    }

    async fn persist(&self, guilds: &[GuildConfig]) -> Result<(), AppError> {
        let entries: Vec<ServerEntry> = guilds
            .iter()
            .cloned()
            .map(GuildConfig::into_entity)
            .collect();
        let bytes = serde_json::to_vec(&entries)?;

        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
