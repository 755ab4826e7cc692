//! Server configuration file schema.
//!
//! The file is a JSON array of server entries:
//!
//! ```json
//! [{
//!     "server_id": 1,
//!     "name": "Test Server",
//!     "birthday_channel": {"channel_id": 1, "name": "birthday-channel", "announcement_rol": 1},
//!     "event_channel": ""
//! }]
//! ```
//!
//! An unconfigured channel is written as the empty string. Files written by older
//! versions of the bot rely on this, so encoding always emits `""` and decoding accepts
//! `""`, `null`, or a missing key.

use serde::{Deserialize, Serialize};

/// One configured Discord guild as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub server_id: u64,
    pub name: String,
    #[serde(default, with = "channel_slot")]
    pub birthday_channel: Option<ChannelEntry>,
    #[serde(default, with = "channel_slot")]
    pub event_channel: Option<ChannelEntry>,
}

/// An announcement channel binding as stored on disk.
///
/// `announcement_rol` keeps the field name used by existing data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub channel_id: u64,
    pub name: String,
    pub announcement_rol: u64,
}

/// Serde adapter mapping `Option<ChannelEntry>` to and from the legacy `""` sentinel.
pub mod channel_slot {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ChannelEntry;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Slot {
        Channel(ChannelEntry),
        Sentinel(String),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<ChannelEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(channel) => channel.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ChannelEntry>, D::Error> {
        match Option::<Slot>::deserialize(deserializer)? {
            Some(Slot::Channel(channel)) => Ok(Some(channel)),
            Some(Slot::Sentinel(text)) if text.is_empty() => Ok(None),
            Some(Slot::Sentinel(text)) => Err(D::Error::custom(format!(
                "expected a channel object or \"\", found string {:?}",
                text
            ))),
            None => Ok(None),
        }
    }
}
