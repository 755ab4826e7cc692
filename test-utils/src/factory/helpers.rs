//! Shared helper utilities for factory methods.

use std::fmt::Display;

use entity::localized::LocalizedText;
use serde::Serialize;
use serde_json::{Map, Value};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Localized text with only the English and Japanese entries set.
pub fn text(en: &str, ja: &str) -> LocalizedText {
    LocalizedText {
        ja: ja.to_string(),
        en: en.to_string(),
        ..Default::default()
    }
}

/// Builds an id-keyed collection payload like `/chara.json` from `(key, entry)` pairs.
///
/// `serde_json::Map` sorts its keys, so tests that depend on upstream order should use
/// keys whose string order matches the intended order.
///
/// # Panics
/// - If an entry cannot be serialized (indicates invalid test data)
pub fn collection<K, T, I>(entries: I) -> Value
where
    K: Display,
    T: Serialize,
    I: IntoIterator<Item = (K, T)>,
{
    let map: Map<String, Value> = entries
        .into_iter()
        .map(|(key, entry)| {
            let value = serde_json::to_value(entry).expect("Failed to serialize test entry");
            (key.to_string(), value)
        })
        .collect();

    Value::Object(map)
}

/// Serializes a single entry into a payload like `/dress/{id}.json`.
///
/// # Panics
/// - If the entry cannot be serialized (indicates invalid test data)
pub fn payload<T: Serialize>(entry: T) -> Value {
    serde_json::to_value(entry).expect("Failed to serialize test entry")
}
