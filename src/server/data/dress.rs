//! Dress repository.
//!
//! Single dresses are fetched on demand. The full `/dress.json` list is only loaded the
//! first time dresses are looked up by character, and only a successful load is kept.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{model::dress::DressRecord, upstream::GameDataSource};

pub struct DressRepository {
    source: Arc<dyn GameDataSource>,
    dresses: RwLock<Option<Vec<DressRecord>>>,
}

impl DressRepository {
    pub fn new(source: Arc<dyn GameDataSource>) -> Self {
        Self {
            source,
            dresses: RwLock::new(None),
        }
    }

    /// Fetches `/dress/{id}.json`.
    ///
    /// # Returns
    /// - `Some(DressRecord)` - The dress
    /// - `None` - Upstream failure or an unparseable card id, logged
    pub async fn get_dress_by_id(&self, id: u64) -> Option<DressRecord> {
        let entry = match self.source.get_dress(id).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Failed to load dress {}: {}", id, e);
                return None;
            }
        };

        match DressRecord::from_entity(entry.basic_info) {
            Ok(dress) => Some(dress),
            Err(e) => {
                tracing::error!("Failed to convert dress {}: {}", id, e);
                None
            }
        }
    }

    /// All dresses of a character, in upstream order.
    ///
    /// Loads `/dress.json` on first use. A failed load returns an empty list and is retried
    /// on the next call.
    pub async fn get_dresses_by_character_id(&self, character_id: u64) -> Vec<DressRecord> {
        if self.dresses.read().await.is_none() {
            let Some(loaded) = self.fetch_dresses().await else {
                return Vec::new();
            };
            *self.dresses.write().await = Some(loaded);
        }

        self.dresses
            .read()
            .await
            .iter()
            .flatten()
            .filter(|dress| dress.character_id == character_id)
            .cloned()
            .collect()
    }

    async fn fetch_dresses(&self) -> Option<Vec<DressRecord>> {
        let entries = match self.source.get_dresses().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to load dresses: {}", e);
                return None;
            }
        };

        let dresses: Vec<DressRecord> = entries
            .into_values()
            .filter_map(|entry| match DressRecord::from_entity(entry.basic_info) {
                Ok(dress) => Some(dress),
                Err(e) => {
                    tracing::warn!("Skipping dress: {}", e);
                    None
                }
            })
            .collect();
        tracing::debug!("Loaded {} dresses", dresses.len());
        Some(dresses)
    }
}
