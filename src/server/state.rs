//! Application state shared by the gateway handlers and the reminder scheduler.
//!
//! The state is built once during startup and cloned into the event handler and the
//! scheduler jobs. Every field is reference-counted, so clones share the same caches
//! and the same servers file store.

use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{
        character::CharacterRepository, dress::DressRepository, enemy::EnemyRepository,
        equip::EquipRepository, event::EventRepository, server_config::ServerConfigStore,
    },
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Validated settings.
    pub config: Arc<Config>,

    /// Playable characters, reloaded on every reminder tick.
    pub characters: Arc<CharacterRepository>,

    /// Event names and the live current-events snapshot.
    pub events: Arc<EventRepository>,

    pub dresses: Arc<DressRepository>,

    pub equips: Arc<EquipRepository>,

    pub enemies: Arc<EnemyRepository>,

    /// Per-guild announcement channels, the only state the bot writes to disk.
    pub servers: Arc<ServerConfigStore>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Validated settings
    /// - `characters` - Character repository
    /// - `events` - Event repository
    /// - `dresses` - Dress repository
    /// - `equips` - Equip repository
    /// - `enemies` - Enemy repository
    /// - `servers` - Servers file store
    pub fn new(
        config: Config,
        characters: CharacterRepository,
        events: EventRepository,
        dresses: DressRepository,
        equips: EquipRepository,
        enemies: EnemyRepository,
        servers: ServerConfigStore,
    ) -> Self {
        Self {
            config: Arc::new(config),
            characters: Arc::new(characters),
            events: Arc::new(events),
            dresses: Arc::new(dresses),
            equips: Arc::new(equips),
            enemies: Arc::new(enemies),
            servers: Arc::new(servers),
        }
    }
}
