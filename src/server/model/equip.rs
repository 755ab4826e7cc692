use entity::equip::EquipBasicInfo;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// A memoir. Generic memoirs belong to no character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipRecord {
    pub id: u64,
    pub character_ids: Vec<u64>,
}

impl EquipRecord {
    pub fn from_entity(entity: EquipBasicInfo) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(&entity.card_id)?,
            character_ids: entity.charas.ids().to_vec(),
        })
    }

    pub fn belongs_to(&self, character_id: u64) -> bool {
        self.character_ids.contains(&character_id)
    }

    pub fn image_url(&self, cdn_url: &str) -> String {
        format!("{}/dlc/res/equip/cg/{}/image.png", cdn_url, self.id)
    }
}
