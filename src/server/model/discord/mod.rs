//! Guild data read from the Serenity cache.
//!
//! The configuration commands resolve channel and role arguments against a snapshot of
//! the guild taken from the cache, so the lookup rules can be tested without a gateway.

/// A channel or role, reduced to what the configuration commands need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedId {
    pub id: u64,
    pub name: String,
}

impl NamedId {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Text channels and roles of one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSnapshot {
    pub guild_id: u64,
    pub guild_name: String,
    pub channels: Vec<NamedId>,
    pub roles: Vec<NamedId>,
}

impl GuildSnapshot {
    /// The `@everyone` role, whose id is the guild id.
    pub fn everyone_role(&self) -> NamedId {
        NamedId::new(self.guild_id, "@everyone")
    }

    /// Finds a text channel by mention (`<#id>`) or by name.
    ///
    /// Names match exactly first, then ignoring case. A leading `#` is ignored.
    pub fn find_channel(&self, query: &str) -> Option<&NamedId> {
        if let Some(id) = parse_mention(query, "<#") {
            return self.channels.iter().find(|channel| channel.id == id);
        }

        find_by_name(&self.channels, query.trim_start_matches('#'))
    }

    /// Finds a role by mention (`<@&id>`) or by name.
    ///
    /// `everyone` and `@everyone` resolve to the default role.
    pub fn find_role(&self, query: &str) -> Option<NamedId> {
        if let Some(id) = parse_mention(query, "<@&") {
            return self.roles.iter().find(|role| role.id == id).cloned();
        }

        if query.eq_ignore_ascii_case("everyone") || query.eq_ignore_ascii_case("@everyone") {
            return Some(self.everyone_role());
        }

        find_by_name(&self.roles, query).cloned()
    }
}

fn parse_mention(query: &str, prefix: &str) -> Option<u64> {
    query
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix('>'))
        .and_then(|id| id.parse().ok())
}

fn find_by_name<'a>(items: &'a [NamedId], name: &str) -> Option<&'a NamedId> {
    items
        .iter()
        .find(|item| item.name == name)
        .or_else(|| items.iter().find(|item| item.name.eq_ignore_ascii_case(name)))
}
