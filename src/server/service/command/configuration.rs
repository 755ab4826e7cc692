//! `birthday_announcements <channel> [role]` and `events_announcements <channel> [role]`

use crate::server::{
    data::server_config::ServerConfigStore,
    model::{announcement::Reply, discord::GuildSnapshot, guild_config::ChannelKind},
};

pub const NOT_ADMIN: &str = "Désolé, tout utilisateur. Only server admins can use this command.";
pub const MISSING_CHANNEL: &str = "Hmm...Please specify the channel name.";

pub struct ConfigurationCommand<'a> {
    servers: &'a ServerConfigStore,
}

impl<'a> ConfigurationCommand<'a> {
    pub fn new(servers: &'a ServerConfigStore) -> Self {
        Self { servers }
    }

    /// Binds the announcement channel of `kind` for the guild.
    ///
    /// The role defaults to `@everyone`. Nothing is stored unless both the channel and
    /// the role resolve.
    ///
    /// # Arguments
    /// - `guild` - Channels and roles of the guild the command was sent in
    /// - `is_admin` - Whether the author has the administrator permission
    /// - `kind` - Which announcement channel to set
    /// - `channel` - Channel name or mention
    /// - `role` - Role name or mention
    pub async fn set_channel(
        &self,
        guild: &GuildSnapshot,
        is_admin: bool,
        kind: ChannelKind,
        channel: Option<&str>,
        role: Option<&str>,
    ) -> Reply {
        if !is_admin {
            return Reply::text(NOT_ADMIN);
        }

        let Some(channel_query) = channel.map(str::trim).filter(|query| !query.is_empty())
        else {
            return Reply::text(MISSING_CHANNEL);
        };

        let role = match role.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => match guild.find_role(query) {
                Some(role) => role,
                None => {
                    return Reply::text(format!(
                        "Je suis desolé - I wasn't able to find role [{}]",
                        query
                    ))
                }
            },
            None => guild.everyone_role(),
        };

        let Some(channel) = guild.find_channel(channel_query) else {
            return Reply::text(format!(
                "Je suis desolé - I wasn't able to find channel [{}]",
                channel_query
            ));
        };

        self.servers
            .upsert_channel(
                guild.guild_id,
                &guild.guild_name,
                channel.id,
                &channel.name,
                kind,
                role.id,
            )
            .await;

        tracing::info!(
            "Set {} channel of guild {} to {} with role {}",
            kind,
            guild.guild_id,
            channel.id,
            role.id
        );

        Reply::text(format!(
            "Fait! - {} channel [{}] was set with role [{}]",
            kind.label(),
            channel.name,
            role.name.trim_start_matches('@')
        ))
    }
}
