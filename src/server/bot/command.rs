//! Chat command parsing.
//!
//! A command is a message that starts with one of the configured prefixes or with a
//! mention of the bot, followed by the command name and its arguments. Arguments are
//! split on whitespace; double quotes group words into one argument.

use crate::server::{config::CommandModule, model::guild_config::ChannelKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `birthday <name>`; every argument is part of the name.
    Birthday { name: Option<String> },
    CurrentEvents,
    /// `birthday_announcements` or `events_announcements`.
    SetChannel {
        kind: ChannelKind,
        channel: Option<String>,
        role: Option<String>,
    },
    ILoveYou,
}

impl Command {
    /// The settings module that has to be enabled for this command to run.
    pub fn module(&self) -> CommandModule {
        match self {
            Command::Birthday { .. } => CommandModule::Birthday,
            Command::CurrentEvents => CommandModule::Event,
            Command::SetChannel { .. } => CommandModule::Configuration,
            Command::ILoveYou => CommandModule::Love,
        }
    }
}

/// Parses a message into a command.
///
/// # Arguments
/// - `content` - Raw message content
/// - `prefixes` - Configured command prefixes; empty prefixes are ignored
/// - `bot_id` - The bot's user id, for mention prefixes
///
/// # Returns
/// - `Some(Command)` - A known command
/// - `None` - Not addressed to the bot, or an unknown command name
pub fn parse_command(content: &str, prefixes: &[String], bot_id: u64) -> Option<Command> {
    let rest = strip_prefix(content, prefixes, bot_id)?;
    let mut args = split_arguments(rest).into_iter();
    let name = args.next()?;

    let command = match name.as_str() {
        "birthday" => {
            let words: Vec<String> = args.collect();
            Command::Birthday {
                name: (!words.is_empty()).then(|| words.join(" ")),
            }
        }
        "current_events" => Command::CurrentEvents,
        "birthday_announcements" => Command::SetChannel {
            kind: ChannelKind::Birthday,
            channel: args.next(),
            role: args.next(),
        },
        "events_announcements" => Command::SetChannel {
            kind: ChannelKind::Event,
            channel: args.next(),
            role: args.next(),
        },
        "i_love_you" => Command::ILoveYou,
        _ => return None,
    };

    Some(command)
}

/// Removes the bot mention or the first matching prefix.
fn strip_prefix<'c>(content: &'c str, prefixes: &[String], bot_id: u64) -> Option<&'c str> {
    for mention in [format!("<@{}>", bot_id), format!("<@!{}>", bot_id)] {
        if let Some(rest) = content.strip_prefix(mention.as_str()) {
            return Some(rest.trim_start());
        }
    }

    prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .find_map(|prefix| content.strip_prefix(prefix.as_str()))
}

/// Splits on whitespace, keeping double-quoted text together without the quotes.
///
/// An unterminated quote runs to the end of the message.
fn split_arguments(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_arg = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_arg = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_arg {
                    args.push(std::mem::take(&mut current));
                    has_arg = false;
                }
            }
            c => {
                current.push(c);
                has_arg = true;
            }
        }
    }

    if has_arg {
        args.push(current);
    }

    args
}
