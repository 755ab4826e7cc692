use std::sync::Arc;

use crate::server::{model::enemy::EnemyRecord, upstream::GameDataSource};

/// Enemy lookups. Nothing is cached.
pub struct EnemyRepository {
    source: Arc<dyn GameDataSource>,
}

impl EnemyRepository {
    pub fn new(source: Arc<dyn GameDataSource>) -> Self {
        Self { source }
    }

    /// Fetches `/enemy/{id}.json`, or `None` on upstream failure.
    pub async fn get_enemy_by_id(&self, id: u64) -> Option<EnemyRecord> {
        match self.source.get_enemy(id).await {
            Ok(entry) => Some(EnemyRecord::from_entity(entry.basic_info)),
            Err(e) => {
                tracing::error!("Failed to load enemy {}: {}", id, e);
                None
            }
        }
    }
}
