//! Conversion of replies and announcements into Serenity message builders.

use serenity::all::{Colour, CreateEmbed, CreateMessage};

use crate::server::model::announcement::{Announcement, MessageEmbed, Reply};

pub fn build_embed(embed: &MessageEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(Colour::from_rgb(embed.color.0, embed.color.1, embed.color.2));

    if let Some(thumbnail) = &embed.thumbnail {
        builder = builder.thumbnail(thumbnail);
    }

    if let Some(image) = &embed.image {
        builder = builder.image(image);
    }

    builder.fields(
        embed
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    )
}

pub fn build_reply(reply: &Reply) -> CreateMessage {
    let mut message = CreateMessage::new();

    if let Some(content) = &reply.content {
        message = message.content(content);
    }

    if let Some(embed) = &reply.embed {
        message = message.embed(build_embed(embed));
    }

    message
}

pub fn build_announcement(announcement: &Announcement) -> CreateMessage {
    CreateMessage::new()
        .content(&announcement.content)
        .embed(build_embed(&announcement.embed))
}
