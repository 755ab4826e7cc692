//! Memoir repository, loaded from `/equip.json` on first use.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{model::equip::EquipRecord, upstream::GameDataSource};

pub struct EquipRepository {
    source: Arc<dyn GameDataSource>,
    equips: RwLock<Option<Vec<EquipRecord>>>,
}

impl EquipRepository {
    pub fn new(source: Arc<dyn GameDataSource>) -> Self {
        Self {
            source,
            equips: RwLock::new(None),
        }
    }

    /// Memoirs picturing a character, in upstream order.
    ///
    /// Generic memoirs (`charas: "None"`) never match. A failed load returns an empty list
    /// and is retried on the next call.
    pub async fn get_equips_by_character_id(&self, character_id: u64) -> Vec<EquipRecord> {
        if self.equips.read().await.is_none() {
            let Some(loaded) = self.fetch_equips().await else {
                return Vec::new();
            };
            *self.equips.write().await = Some(loaded);
        }

        self.equips
            .read()
            .await
            .iter()
            .flatten()
            .filter(|equip| equip.belongs_to(character_id))
            .cloned()
            .collect()
    }

    async fn fetch_equips(&self) -> Option<Vec<EquipRecord>> {
        let entries = match self.source.get_equips().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to load equips: {}", e);
                return None;
            }
        };

        let equips: Vec<EquipRecord> = entries
            .into_values()
            .filter_map(|entry| match EquipRecord::from_entity(entry.basic_info) {
                Ok(equip) => Some(equip),
                Err(e) => {
                    tracing::warn!("Skipping equip: {}", e);
                    None
                }
            })
            .collect();
        tracing::debug!("Loaded {} equips", equips.len());
        Some(equips)
    }
}
