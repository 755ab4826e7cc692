//! `/enemy/{id}.json` payload.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyEntry {
    #[serde(rename = "basicInfo")]
    pub basic_info: EnemyBasicInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBasicInfo {
    /// Variant-qualified id such as `"900620402_0"`.
    #[serde(rename = "enemyID")]
    pub enemy_id: String,
    pub icon: u64,
    pub rarity: u8,
    #[serde(default)]
    pub name: LocalizedText,
}
