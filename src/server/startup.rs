use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{
        character::CharacterRepository, dress::DressRepository, enemy::EnemyRepository,
        equip::EquipRepository, event::EventRepository, server_config::ServerConfigStore,
    },
    error::AppError,
    state::AppState,
    upstream::{GameDataSource, KarthuriaClient},
};

/// Builds the HTTP client used for every upstream request.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client identifying itself as kuro
/// - `Err(AppError::ReqwestErr)` - The TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("kuro/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the repositories and the servers file store.
///
/// Characters, event names and the servers file are loaded here. Upstream or file
/// failures only leave the affected cache empty, so startup continues regardless.
///
/// # Arguments
/// - `config` - Validated settings
/// - `http` - Client from `setup_reqwest_client`
pub async fn build_state(config: Config, http: reqwest::Client) -> AppState {
    let source: Arc<dyn GameDataSource> = Arc::new(KarthuriaClient::new(http, config.api_url()));

    let characters = CharacterRepository::load(source.clone(), config.cdn_url()).await;
    let events = EventRepository::load(source.clone()).await;
    let dresses = DressRepository::new(source.clone());
    let equips = EquipRepository::new(source.clone());
    let enemies = EnemyRepository::new(source);
    let servers = ServerConfigStore::open(config.servers_path.clone()).await;

    tracing::info!(
        "Loaded {} characters, {} event names and {} guild configurations",
        characters.get_characters().await.len(),
        events.get_events().await.len(),
        servers.all().await.len()
    );

    AppState::new(config, characters, events, dresses, equips, enemies, servers)
}
