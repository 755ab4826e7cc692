//! `/chara.json` and `/chara/{id}.json` payloads.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;

/// One value of the `/chara.json` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharaEntry {
    #[serde(rename = "basicInfo")]
    pub basic_info: CharaBasicInfo,
}

/// `/chara/{id}.json`.
///
/// The detail endpoint omits `name_ruby` from `basicInfo` and carries it in `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharaDetail {
    #[serde(rename = "basicInfo")]
    pub basic_info: CharaBasicInfo,
    pub info: CharaInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharaBasicInfo {
    #[serde(rename = "charaID")]
    pub chara_id: u64,
    /// `0` for non-playable entries.
    pub birth_day: u32,
    pub birth_month: u32,
    #[serde(default)]
    pub school_id: u32,
    #[serde(default)]
    pub name_ruby: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharaInfo {
    pub cv: LocalizedText,
    pub introduction: LocalizedText,
    pub likes: LocalizedText,
    pub dislikes: LocalizedText,
    pub name_ruby: Option<LocalizedText>,
}
