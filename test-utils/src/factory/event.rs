//! Event factories for `/event.json` and `/current.json` payloads.

use chrono::{DateTime, Utc};
use entity::event::EventEntry;
use serde_json::{json, Map, Value};

use crate::factory::helpers::text;

/// Creates an `/event.json` entry with the given English name.
pub fn create_event_name(name: &str) -> EventEntry {
    EventEntry {
        name: text(name, ""),
    }
}

/// Factory for `/current.json` snapshots.
///
/// `CurrentEvents` is only ever decoded by the bot, so this factory builds the raw JSON
/// the API sends. Sections without entries are omitted, as upstream does.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::CurrentEventsFactory;
///
/// let payload = CurrentEventsFactory::new()
///     .event(118, begin, end)
///     .challenge(1050009, begin, end)
///     .score_attack(20, end, &[(900620402, "42.5")])
///     .build();
/// ```
pub struct CurrentEventsFactory {
    events: Map<String, Value>,
    rogues: Map<String, Value>,
    titan: Option<Value>,
}

impl CurrentEventsFactory {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self {
            events: Map::new(),
            rogues: Map::new(),
            titan: None,
        }
    }

    /// Adds a regular event. Timestamps are given for two regions, the second a day later.
    pub fn event(mut self, id: u64, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let (begin, end) = (begin.timestamp(), end.timestamp());
        self.events.insert(
            id.to_string(),
            json!({
                "id": id,
                "beginAt": [begin, begin + 86400],
                "endAt": [end, end + 86400],
            }),
        );
        self
    }

    /// Adds a challenge revue featuring dress `dress_id`.
    pub fn challenge(mut self, dress_id: u64, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let slot = self.rogues.len().to_string();
        self.rogues.insert(
            slot,
            json!({
                "id": dress_id,
                "beginAt": begin.timestamp(),
                "endAt": end.timestamp(),
            }),
        );
        self
    }

    /// Sets the score attack revue with its enemies as `(enemy id, hp left percent)`.
    pub fn score_attack(mut self, id: u64, end: DateTime<Utc>, enemies: &[(u64, &str)]) -> Self {
        let enemy: Map<String, Value> = enemies
            .iter()
            .enumerate()
            .map(|(slot, (enemy_id, hp))| {
                (
                    slot.to_string(),
                    json!({"id": enemy_id, "hpLeftPercent": hp}),
                )
            })
            .collect();

        self.titan = Some(json!({
            "id": id,
            "endAt": end.timestamp(),
            "enemy": enemy,
        }));
        self
    }

    pub fn build(self) -> Value {
        let mut body = Map::new();
        if !self.events.is_empty() {
            body.insert("event".to_string(), Value::Object(self.events));
        }
        if !self.rogues.is_empty() {
            body.insert("rogue".to_string(), Value::Object(self.rogues));
        }
        if let Some(titan) = self.titan {
            body.insert("titan".to_string(), titan);
        }
        Value::Object(body)
    }
}

impl Default for CurrentEventsFactory {
    fn default() -> Self {
        Self::new()
    }
}
