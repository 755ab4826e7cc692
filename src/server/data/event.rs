//! Event repository.
//!
//! Loads the event name list from `/event.json` eagerly. `/current.json` is never cached;
//! every call fetches the live snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{
    model::event::{CurrentEvents, EventName},
    upstream::GameDataSource,
};

pub struct EventRepository {
    source: Arc<dyn GameDataSource>,
    names: RwLock<Vec<EventName>>,
}

impl EventRepository {
    /// Creates the repository and loads the event name list.
    pub async fn load(source: Arc<dyn GameDataSource>) -> Self {
        let repository = Self {
            source,
            names: RwLock::new(Vec::new()),
        };
        repository.reload_events().await;
        repository
    }

    /// Replaces the name list with a fresh copy of `/event.json`.
    ///
    /// On failure the list is emptied and the error logged.
    pub async fn reload_events(&self) {
        let names = self.fetch_names().await;
        *self.names.write().await = names;
    }

    async fn fetch_names(&self) -> Vec<EventName> {
        let entries = match self.source.get_events().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to load events: {}", e);
                return Vec::new();
            }
        };

        let names: Vec<EventName> = entries
            .0
            .into_iter()
            .filter_map(|(key, entry)| match EventName::from_entity(&key, entry) {
                Ok(name) => Some(name),
                Err(e) => {
                    tracing::warn!("Skipping event {}: {}", key, e);
                    None
                }
            })
            .collect();
        tracing::debug!("Loaded {} event names", names.len());
        names
    }

    pub async fn get_events(&self) -> Vec<EventName> {
        self.names.read().await.clone()
    }

    pub async fn get_event_name_by_id(&self, id: u64) -> Option<String> {
        self.names
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .map(|event| event.name.clone())
    }

    /// Finds the first event whose name contains `name`, ignoring case.
    pub async fn get_event_by_name(&self, name: &str) -> Option<EventName> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.names
            .read()
            .await
            .iter()
            .find(|event| event.name.to_lowercase().contains(&query))
            .cloned()
    }

    /// Fetches the live `/current.json` snapshot.
    ///
    /// Names and rarities are left unresolved. An upstream failure gives an empty
    /// snapshot; entries that fail to convert are dropped one by one.
    pub async fn get_current_events(&self) -> CurrentEvents {
        let entity = match self.source.get_current_events().await {
            Ok(entity) => entity,
            Err(e) => {
                tracing::error!("Failed to load current events: {}", e);
                return CurrentEvents::default();
            }
        };

        CurrentEvents::from_entity(entity)
    }
}
