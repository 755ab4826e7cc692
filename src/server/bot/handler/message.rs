//! Message handler for chat commands.
//!
//! Messages from bots are ignored. Everything else is parsed as a command; unknown
//! commands and commands of disabled modules are dropped silently. Replies are posted to
//! the channel the command came from.

use serenity::all::{ChannelType, Context, GuildChannel, GuildId, Mentionable, Message, Role};

use crate::server::{
    bot::{
        command::{parse_command, Command},
        embed::build_reply,
    },
    model::{
        announcement::Reply,
        discord::{GuildSnapshot, NamedId},
    },
    service::{
        command::{
            birthday::BirthdayCommand, configuration::ConfigurationCommand, event::EventCommand,
            love::LoveCommand,
        },
        event::EventService,
    },
    state::AppState,
};

/// Handles a message sent in any channel the bot can see.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for the cache and HTTP client
/// - `message` - The message that was sent
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let bot_id = ctx.cache.current_user().id.get();
    let Some(command) = parse_command(&message.content, &state.config.prefixes, bot_id) else {
        return;
    };

    if !state.config.is_enabled(command.module()) {
        tracing::debug!(
            "Ignoring {:?} from {}: module {:?} is disabled",
            command,
            message.author.id,
            command.module()
        );
        return;
    }

    let Some(reply) = run_command(state, &ctx, &message, command).await else {
        return;
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, build_reply(&reply))
        .await
    {
        tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
    }
}

async fn run_command(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    command: Command,
) -> Option<Reply> {
    let reply = match command {
        Command::Birthday { name } => {
            BirthdayCommand::new(&state.characters)
                .birthday(name.as_deref())
                .await
        }
        Command::CurrentEvents => {
            let events = EventService::new(&state.events, &state.dresses, &state.enemies);
            EventCommand::new(events).current_events().await
        }
        Command::SetChannel {
            kind,
            channel,
            role,
        } => {
            let Some(guild_id) = message.guild_id else {
                tracing::debug!("Ignoring {} channel command outside a guild", kind);
                return None;
            };
            let Some(guild) = guild_snapshot(ctx, guild_id) else {
                tracing::warn!("Guild {} is not in the cache", guild_id);
                return None;
            };
            let is_admin = is_admin(ctx, message);

            ConfigurationCommand::new(&state.servers)
                .set_channel(&guild, is_admin, kind, channel.as_deref(), role.as_deref())
                .await
        }
        Command::ILoveYou => {
            let mention = message.author.mention().to_string();
            LoveCommand::new(&state.dresses, &state.equips, state.config.cdn_url())
                .i_love_you(&mention)
                .await
        }
    };

    Some(reply)
}

/// Whether the author has the administrator permission in the message's channel.
fn is_admin(ctx: &Context, message: &Message) -> bool {
    message
        .author_permissions(&ctx.cache)
        .is_some_and(|permissions| permissions.administrator())
}

/// Copies the text channels and roles of a cached guild.
///
/// Not async, so the cache guard is released before the caller awaits anything.
fn guild_snapshot(ctx: &Context, guild_id: GuildId) -> Option<GuildSnapshot> {
    let guild = ctx.cache.guild(guild_id)?;

    Some(GuildSnapshot {
        guild_id: guild_id.get(),
        guild_name: guild.name.clone(),
        channels: named_text_channels(guild.channels.values()),
        roles: named_roles(guild.roles.values()),
    })
}

/// Text and announcement channels in sidebar order.
fn named_text_channels<'c>(channels: impl IntoIterator<Item = &'c GuildChannel>) -> Vec<NamedId> {
    let mut channels: Vec<&GuildChannel> = channels
        .into_iter()
        .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
        .collect();
    channels.sort_by_key(|channel| (channel.position, channel.id));

    channels
        .into_iter()
        .map(|channel| NamedId::new(channel.id.get(), channel.name.clone()))
        .collect()
}

/// Roles from the top of the hierarchy down, so name lookups prefer higher roles.
fn named_roles<'r>(roles: impl IntoIterator<Item = &'r Role>) -> Vec<NamedId> {
    let mut roles: Vec<&Role> = roles.into_iter().collect();
    roles.sort_by_key(|role| (std::cmp::Reverse(role.position), role.id));

    roles
        .into_iter()
        .map(|role| NamedId::new(role.id.get(), role.name.clone()))
        .collect()
}
