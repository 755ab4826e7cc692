use entity::enemy::EnemyBasicInfo;

/// A score attack boss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyRecord {
    /// Variant-qualified id such as `900620402_0`.
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub icon: u64,
}

impl EnemyRecord {
    pub fn from_entity(entity: EnemyBasicInfo) -> Self {
        Self {
            id: entity.enemy_id,
            name: entity.name.english_or_japanese().to_string(),
            rarity: entity.rarity,
            icon: entity.icon,
        }
    }
}
