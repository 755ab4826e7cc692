//! Character repository.
//!
//! Loads `/chara.json` eagerly and answers lookups by id, name, and birthday with a
//! linear scan in upstream order. Birthday lookups hydrate the match with its profile
//! from `/chara/{id}.json`.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{model::character::CharacterRecord, upstream::GameDataSource};

/// Read-through cache of playable characters.
pub struct CharacterRepository {
    source: Arc<dyn GameDataSource>,
    cdn_url: String,
    characters: RwLock<Vec<CharacterRecord>>,
}

impl CharacterRepository {
    /// Creates the repository and loads the character list.
    ///
    /// An upstream failure leaves the cache empty; see `reload`.
    ///
    /// # Arguments
    /// - `source` - Upstream data source
    /// - `cdn_url` - CDN base URL for portrait images
    pub async fn load(source: Arc<dyn GameDataSource>, cdn_url: impl Into<String>) -> Self {
        let repository = Self {
            source,
            cdn_url: cdn_url.into(),
            characters: RwLock::new(Vec::new()),
        };
        repository.reload().await;
        repository
    }

    /// Replaces the cache with a fresh copy of `/chara.json`.
    ///
    /// On failure the cache is emptied and the error logged, so stale data is never served
    /// after a failed reload.
    pub async fn reload(&self) {
        let characters = self.fetch_characters().await;
        *self.characters.write().await = characters;
    }

    async fn fetch_characters(&self) -> Vec<CharacterRecord> {
        match self.source.get_characters().await {
            Ok(entries) => {
                let characters: Vec<CharacterRecord> = entries
                    .into_values()
                    .filter_map(|entry| CharacterRecord::from_entity(entry.basic_info, &self.cdn_url))
                    .collect();
                tracing::debug!("Loaded {} characters", characters.len());
                characters
            }
            Err(e) => {
                tracing::error!("Failed to load characters: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_characters(&self) -> Vec<CharacterRecord> {
        self.characters.read().await.clone()
    }

    pub async fn get_character_by_id(&self, id: u64) -> Option<CharacterRecord> {
        self.characters
            .read()
            .await
            .iter()
            .find(|character| character.id == id)
            .cloned()
    }

    /// Finds the first character whose name contains `name`, ignoring case.
    ///
    /// # Returns
    /// - `Some(CharacterRecord)` - First match in upstream order
    /// - `None` - No match, or a blank query
    pub async fn get_character_by_name(&self, name: &str) -> Option<CharacterRecord> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.characters
            .read()
            .await
            .iter()
            .find(|character| character.name.to_lowercase().contains(&query))
            .cloned()
    }

    /// Finds the character born on `date` and hydrates it with its profile.
    ///
    /// Falls back to the basic record when the detail fetch fails.
    ///
    /// # Arguments
    /// - `date` - Day and month as `DD/MM`, e.g. `01/08`
    ///
    /// # Returns
    /// - `Some(CharacterRecord)` - The first character born on `date`
    /// - `None` - Nobody's birthday
    pub async fn get_character_birthday(&self, date: &str) -> Option<CharacterRecord> {
        let basic = self
            .characters
            .read()
            .await
            .iter()
            .find(|character| character.birthday.to_string() == date)
            .cloned()?;

        let detailed = self.get_character_detail(basic.id).await;
        Some(detailed.unwrap_or(basic))
    }

    /// Fetches `/chara/{id}.json` without touching the cache.
    ///
    /// # Returns
    /// - `Some(CharacterRecord)` - Record including its `CharacterDetail`
    /// - `None` - Upstream failure, or a non-playable character
    pub async fn get_character_detail(&self, id: u64) -> Option<CharacterRecord> {
        match self.source.get_character(id).await {
            Ok(detail) => CharacterRecord::from_detail(detail, &self.cdn_url),
            Err(e) => {
                tracing::error!("Failed to load character {}: {}", id, e);
                None
            }
        }
    }
}
