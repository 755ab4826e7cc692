//! Enemy factory for `/enemy/{id}.json` payloads.

use entity::enemy::{EnemyBasicInfo, EnemyEntry};

use crate::factory::helpers::text;

/// Creates an enemy payload for the base variant of `id`.
///
/// # Arguments
/// - `id` - Enemy ID as used in `/current.json`
/// - `name` - English name
/// - `rarity` - Displayed rarity
pub fn create_enemy(id: u64, name: &str, rarity: u8) -> EnemyEntry {
    EnemyEntry {
        basic_info: EnemyBasicInfo {
            enemy_id: format!("{}_0", id),
            icon: id,
            rarity,
            name: text(name, ""),
        },
    }
}
