//! Discord gateway integration.
//!
//! The bot reads chat commands from guild messages and replies in the same channel, and
//! starts the reminder scheduler once the gateway connection is ready. Serenity's cache
//! provides the guild list for reminders and the channels and roles used to resolve
//! configuration command arguments.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the cache with guilds, channels and roles
//! - `GUILD_MESSAGES` - Receive messages sent in guild channels
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod embed;
pub mod handler;
pub mod notifier;
pub mod start;
