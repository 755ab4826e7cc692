use entity::dress::DressBasicInfo;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// A stage girl card, as used for challenge revue names and love command images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DressRecord {
    pub id: u64,
    pub name: String,
    pub rarity: u8,
    pub character_id: u64,
}

impl DressRecord {
    /// Converts a dress entry to the dress domain model
    ///
    /// # Returns
    /// - `Ok(DressRecord)` - Converted dress
    /// - `Err(AppError::InternalErr(ParseStringId))` - The card id is not numeric
    pub fn from_entity(entity: DressBasicInfo) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(&entity.card_id)?,
            name: entity.name.english_or_japanese().to_string(),
            rarity: entity.rarity,
            character_id: entity.character,
        })
    }

    pub fn image_url(&self, cdn_url: &str) -> String {
        format!("{}/dlc/res/dress/cg/{}/image.png", cdn_url, self.id)
    }
}
