//! Outgoing message models.
//!
//! Services describe what to post with these types and the bot layer turns them into
//! Serenity builders, which keeps message formatting testable without a Discord client.

/// An RGB embed colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Accent colour of the game, used for event embeds.
pub const RELIVE_RGB: Rgb = Rgb(234, 1, 36);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEmbed {
    pub title: String,
    pub description: String,
    pub color: Rgb,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub fields: Vec<EmbedField>,
}

impl MessageEmbed {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: Rgb) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            thumbnail: None,
            image: None,
            fields: Vec::new(),
        }
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

/// A scheduled post to a configured announcement channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Role mention placed in the message content so the role is pinged.
    pub content: String,
    pub embed: MessageEmbed,
}

/// A response to a chat command, posted in the channel the command came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<MessageEmbed>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
        }
    }

    pub fn embed(embed: MessageEmbed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Mention markup for a role.
///
/// The `@everyone` role shares its id with the guild and has to be written literally.
pub fn role_mention(guild_id: u64, role_id: u64) -> String {
    if role_id == guild_id {
        "@everyone".to_string()
    } else {
        format!("<@&{}>", role_id)
    }
}
