//! `current_events`

use crate::server::{
    model::{
        announcement::{MessageEmbed, Reply, RELIVE_RGB},
        event::{CurrentEvents, EventRecord},
    },
    service::event::EventService,
    util::date::event_time,
};

pub struct EventCommand<'a> {
    events: EventService<'a>,
}

impl<'a> EventCommand<'a> {
    pub fn new(events: EventService<'a>) -> Self {
        Self { events }
    }

    /// Lists everything currently running with its end date.
    ///
    /// Sections without entries are left out of the embed.
    pub async fn current_events(&self) -> Reply {
        let current = self.events.current_events().await;
        Reply::embed(current_events_embed(&current))
    }
}

pub fn current_events_embed(current: &CurrentEvents) -> MessageEmbed {
    let mut embed = MessageEmbed::new(
        "List of Current Ongoing Events",
        "This is what I could find:",
        RELIVE_RGB,
    );

    let sections = [
        ("Events", bullet_list(current.events.iter())),
        (
            "Challenges Revue",
            bullet_list(current.challenges.iter().map(|challenge| &challenge.event)),
        ),
        (
            "Score Attack Revue",
            bullet_list(current.bosses.iter().map(|boss| &boss.event)),
        ),
    ];

    for (name, value) in sections {
        if !value.is_empty() {
            embed = embed.field(name, value, false);
        }
    }

    embed
}

fn bullet_list<'r>(records: impl Iterator<Item = &'r EventRecord>) -> String {
    records
        .map(|record| {
            let end = record
                .end_date
                .map(event_time)
                .unwrap_or_else(|| "unknown".to_string());
            format!(":white_small_square:{} - {} \n", record.display_name(), end)
        })
        .collect()
}
