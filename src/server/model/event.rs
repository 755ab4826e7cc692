//! Event domain models.
//!
//! `/current.json` only carries ids and timestamps. Names (and rarity for challenges and
//! bosses) are filled in afterwards from the event name list and the dress and enemy
//! lookups; see `service::event`.

use chrono::{DateTime, Utc};
use entity::event::{CurrentEvent, EventEntry, Rogue, Titan};

use crate::server::{
    error::AppError,
    util::{
        date::{calendar_days_until, timestamp_to_utc},
        parse::parse_u64_from_string,
    },
};

/// Name shown for ids that could not be resolved.
pub const UNKNOWN_NAME: &str = "NN";

const EVENT_BANNER_URL: &str =
    "https://api.karen.makoo.eu/api/assets/ww/res_en/res/event_permanent/banner";
const CHALLENGE_ICON_URL: &str = "https://api.karen.makoo.eu/api/assets/jp/res/item_root/large";
const ENEMY_ICON_URL: &str = "https://api.karen.makoo.eu/api/assets/jp/res/icon/enemy";

/// An entry of `/event.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventName {
    pub id: u64,
    pub name: String,
}

impl EventName {
    /// Converts an `/event.json` entry, keyed by its id.
    pub fn from_entity(key: &str, entity: EventEntry) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(key)?,
            name: entity.name.english_or_japanese().to_string(),
        })
    }
}

/// Common shape of everything running in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: u64,
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub icon: String,
}

impl EventRecord {
    pub fn new(id: u64, start_date: Option<DateTime<Utc>>, end_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            name: None,
            start_date,
            end_date,
            icon: format!("{}/event_banner_{}.png", EVENT_BANNER_URL, id),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// True when the end date is exactly one calendar day after `now`.
    pub fn ends_in_one_day(&self, now: DateTime<Utc>) -> bool {
        self.end_date
            .is_some_and(|end| calendar_days_until(now, end) == 1)
    }

    /// True when the start date is exactly one calendar day after `now`.
    pub fn starts_in_one_day(&self, now: DateTime<Utc>) -> bool {
        self.start_date
            .is_some_and(|start| calendar_days_until(now, start) == 1)
    }
}

/// A challenge revue. The id is the featured dress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    pub event: EventRecord,
    pub rarity: Option<u8>,
}

impl ChallengeRecord {
    pub fn new(id: u64, start_date: Option<DateTime<Utc>>, end_date: Option<DateTime<Utc>>) -> Self {
        let mut event = EventRecord::new(id, start_date, end_date);
        event.icon = format!("{}/1_{}.png", CHALLENGE_ICON_URL, id);

        Self {
            event,
            rarity: None,
        }
    }
}

/// A score attack revue boss. The id is the enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossRecord {
    pub event: EventRecord,
    pub rarity: Option<u8>,
    pub hp_percentage: Option<String>,
}

impl BossRecord {
    pub fn new(id: u64, end_date: Option<DateTime<Utc>>, hp_percentage: Option<String>) -> Self {
        let mut event = EventRecord::new(id, None, end_date);
        event.icon = format!("{}/{}.png", ENEMY_ICON_URL, id);

        Self {
            event,
            rarity: None,
            hp_percentage,
        }
    }
}

/// Snapshot of everything currently running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentEvents {
    pub events: Vec<EventRecord>,
    pub challenges: Vec<ChallengeRecord>,
    pub bosses: Vec<BossRecord>,
}

impl CurrentEvents {
    /// Converts the `/current.json` snapshot
    ///
    /// Events carry one timestamp per server region; the first one is used. Every boss
    /// of the score attack revue shares the revue's end date. Entries with a timestamp
    /// chrono cannot represent are skipped with a warning; the rest of the snapshot is
    /// kept.
    pub fn from_entity(entity: entity::event::CurrentEvents) -> Self {
        let events = entity
            .event
            .0
            .into_iter()
            .filter_map(|(key, entry)| match event_from_entity(entry) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!("Skipping current event {}: {}", key, e);
                    None
                }
            })
            .collect();

        let challenges = entity
            .rogue
            .0
            .into_iter()
            .filter_map(|(key, entry)| match challenge_from_entity(entry) {
                Ok(challenge) => Some(challenge),
                Err(e) => {
                    tracing::warn!("Skipping challenge revue {}: {}", key, e);
                    None
                }
            })
            .collect();

        let bosses = match entity.titan {
            Some(titan) => {
                let id = titan.id;
                bosses_from_entity(titan).unwrap_or_else(|e| {
                    tracing::warn!("Skipping score attack revue {}: {}", id, e);
                    Vec::new()
                })
            }
            None => Vec::new(),
        };

        Self {
            events,
            challenges,
            bosses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.challenges.is_empty() && self.bosses.is_empty()
    }

    /// Every record in the snapshot: events, then challenges, then bosses.
    pub fn records(&self) -> impl Iterator<Item = &EventRecord> {
        self.events
            .iter()
            .chain(self.challenges.iter().map(|challenge| &challenge.event))
            .chain(self.bosses.iter().map(|boss| &boss.event))
    }

    /// Records ending tomorrow, followed by records starting tomorrow.
    pub fn notices(&self, now: DateTime<Utc>) -> Vec<EventNotice> {
        let ending = self
            .records()
            .filter(|record| record.ends_in_one_day(now))
            .map(|record| EventNotice {
                milestone: Milestone::Ending,
                event: record.clone(),
            });

        let starting = self
            .records()
            .filter(|record| record.starts_in_one_day(now))
            .map(|record| EventNotice {
                milestone: Milestone::Starting,
                event: record.clone(),
            });

        ending.chain(starting).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Starting,
    Ending,
}

/// An event that starts or ends tomorrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNotice {
    pub milestone: Milestone,
    pub event: EventRecord,
}

impl EventNotice {
    /// The date the milestone happens on.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self.milestone {
            Milestone::Starting => self.event.start_date,
            Milestone::Ending => self.event.end_date,
        }
    }
}

fn first_timestamp(timestamps: &[i64]) -> Result<Option<DateTime<Utc>>, AppError> {
    Ok(timestamps
        .first()
        .map(|timestamp| timestamp_to_utc(*timestamp))
        .transpose()?)
}

fn optional_timestamp(timestamp: Option<i64>) -> Result<Option<DateTime<Utc>>, AppError> {
    Ok(timestamp.map(timestamp_to_utc).transpose()?)
}

fn event_from_entity(entity: CurrentEvent) -> Result<EventRecord, AppError> {
    Ok(EventRecord::new(
        entity.id,
        first_timestamp(&entity.begin_at)?,
        first_timestamp(&entity.end_at)?,
    ))
}

fn challenge_from_entity(entity: Rogue) -> Result<ChallengeRecord, AppError> {
    Ok(ChallengeRecord::new(
        entity.id,
        optional_timestamp(entity.begin_at)?,
        optional_timestamp(entity.end_at)?,
    ))
}

fn bosses_from_entity(titan: Titan) -> Result<Vec<BossRecord>, AppError> {
    let end_date = optional_timestamp(titan.end_at)?;

    Ok(titan
        .enemy
        .into_values()
        .map(|enemy| BossRecord::new(enemy.id, end_date, enemy.hp_left_percent))
        .collect())
}
