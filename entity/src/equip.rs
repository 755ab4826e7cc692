//! `/equip.json` payload.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipEntry {
    #[serde(rename = "basicInfo")]
    pub basic_info: EquipBasicInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipBasicInfo {
    #[serde(rename = "cardID")]
    pub card_id: String,
    pub rarity: u8,
    #[serde(default)]
    pub charas: Charas,
    #[serde(default)]
    pub name: LocalizedText,
}

/// The characters an equip belongs to.
///
/// Generic equips come back as the literal string `"None"` rather than an empty list or
/// a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Charas {
    Ids(Vec<u64>),
    Literal(String),
}

impl Charas {
    /// Character ids, empty for the `"None"` literal (or any other string).
    pub fn ids(&self) -> &[u64] {
        match self {
            Charas::Ids(ids) => ids,
            Charas::Literal(_) => &[],
        }
    }
}

impl Default for Charas {
    fn default() -> Self {
        Charas::Ids(Vec::new())
    }
}
