//! Per-guild announcement configuration.
//!
//! Defines the guild configuration domain model and its conversion from and into the
//! on-disk `entity::server` records.

use std::fmt;

use entity::server::{ChannelEntry, ServerEntry};

/// The two kinds of announcement channel a guild can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Birthday,
    Event,
}

impl ChannelKind {
    /// Capitalised name used in replies, e.g. `Birthday channel [...] was set`.
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Birthday => "Birthday",
            ChannelKind::Event => "Event",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Birthday => write!(f, "birthday"),
            ChannelKind::Event => write!(f, "event"),
        }
    }
}

/// Channel announcements are posted to, and the role they mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBinding {
    pub channel_id: u64,
    pub channel_name: String,
    pub role_id: u64,
}

impl ChannelBinding {
    pub fn from_entity(entity: ChannelEntry) -> Self {
        Self {
            channel_id: entity.channel_id,
            channel_name: entity.name,
            role_id: entity.announcement_rol,
        }
    }

    pub fn into_entity(self) -> ChannelEntry {
        ChannelEntry {
            channel_id: self.channel_id,
            name: self.channel_name,
            announcement_rol: self.role_id,
        }
    }
}

/// The guild configuration domain model
///
/// At most one binding per channel kind; either may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub guild_name: String,
    pub birthday_channel: Option<ChannelBinding>,
    pub event_channel: Option<ChannelBinding>,
}

impl GuildConfig {
    /// Creates a guild configuration with no channels bound.
    pub fn new(guild_id: u64, guild_name: impl Into<String>) -> Self {
        Self {
            guild_id,
            guild_name: guild_name.into(),
            birthday_channel: None,
            event_channel: None,
        }
    }

    pub fn channel(&self, kind: ChannelKind) -> Option<&ChannelBinding> {
        match kind {
            ChannelKind::Birthday => self.birthday_channel.as_ref(),
            ChannelKind::Event => self.event_channel.as_ref(),
        }
    }

    /// Replaces the binding for `kind`, leaving the other kind untouched.
    pub fn set_channel(&mut self, kind: ChannelKind, binding: ChannelBinding) {
        match kind {
            ChannelKind::Birthday => self.birthday_channel = Some(binding),
            ChannelKind::Event => self.event_channel = Some(binding),
        }
    }

    /// Converts a stored server entry to the guild configuration domain model
    ///
    /// # Arguments
    /// - `entity` - The server entry read from the servers file
    pub fn from_entity(entity: ServerEntry) -> Self {
        Self {
            guild_id: entity.server_id,
            guild_name: entity.name,
            birthday_channel: entity.birthday_channel.map(ChannelBinding::from_entity),
            event_channel: entity.event_channel.map(ChannelBinding::from_entity),
        }
    }

    pub fn into_entity(self) -> ServerEntry {
        ServerEntry {
            server_id: self.guild_id,
            name: self.guild_name,
            birthday_channel: self.birthday_channel.map(ChannelBinding::into_entity),
            event_channel: self.event_channel.map(ChannelBinding::into_entity),
        }
    }
}
