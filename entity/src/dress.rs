//! `/dress.json` and `/dress/{id}.json` payloads.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;

/// One value of `/dress.json`, and the whole body of `/dress/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DressEntry {
    #[serde(rename = "basicInfo")]
    pub basic_info: DressBasicInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DressBasicInfo {
    /// Numeric id shipped as a string, e.g. `"1050009"`.
    #[serde(rename = "cardID")]
    pub card_id: String,
    pub rarity: u8,
    pub character: u64,
    #[serde(default)]
    pub name: LocalizedText,
}
