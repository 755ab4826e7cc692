//! `/event.json` and `/current.json` payloads.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;
use crate::ordered::OrderedMap;

/// One value of `/event.json`. Only names are published there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(default)]
    pub name: LocalizedText,
}

/// `/current.json`: the live snapshot of running events.
///
/// Each section is omitted when nothing of that kind is running.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentEvents {
    /// Score attack revue.
    pub titan: Option<Titan>,
    pub event: OrderedMap<CurrentEvent>,
    /// Challenge revues, keyed by slot; `id` is the featured dress.
    pub rogue: OrderedMap<Rogue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentEvent {
    pub id: u64,
    /// One timestamp per server region; the first is the primary server.
    #[serde(rename = "beginAt", default)]
    pub begin_at: Vec<i64>,
    #[serde(rename = "endAt", default)]
    pub end_at: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rogue {
    pub id: u64,
    #[serde(rename = "beginAt")]
    pub begin_at: Option<i64>,
    #[serde(rename = "endAt")]
    pub end_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Titan {
    pub id: u64,
    #[serde(rename = "endAt")]
    pub end_at: Option<i64>,
    #[serde(default)]
    pub enemy: OrderedMap<TitanEnemy>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitanEnemy {
    pub id: u64,
    #[serde(rename = "hpLeftPercent")]
    pub hp_left_percent: Option<String>,
}
