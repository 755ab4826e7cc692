//! Karthuria API access.
//!
//! Repositories talk to the API through the `GameDataSource` trait. The production
//! implementation is the reqwest-backed `KarthuriaClient`; tests substitute an in-memory
//! source serving fixture payloads by path.
//!
//! Every method returns the decoded wire type from the `entity` crate. Conversion to
//! domain models, and the degrade-to-empty policy on failure, belong to the repositories.

pub mod client;

#[cfg(test)]
pub mod fake;

use entity::prelude::{
    CharaDetail, CharaEntry, CurrentEvents, DressEntry, EnemyEntry, EquipEntry, EventEntry,
    OrderedMap,
};
use serenity::async_trait;

use crate::server::error::AppError;

pub use client::KarthuriaClient;

/// Endpoint paths, relative to the API base URL.
pub mod path {
    pub const CHARACTERS: &str = "/chara.json";
    pub const DRESSES: &str = "/dress.json";
    pub const EQUIPS: &str = "/equip.json";
    pub const EVENTS: &str = "/event.json";
    pub const CURRENT_EVENTS: &str = "/current.json";

    pub fn character(id: u64) -> String {
        format!("/chara/{}.json", id)
    }

    pub fn dress(id: u64) -> String {
        format!("/dress/{}.json", id)
    }

    pub fn enemy(id: u64) -> String {
        format!("/enemy/{}.json", id)
    }
}

/// Read-only access to the game data endpoints.
///
/// Collections keep the order the API sent them in.
#[async_trait]
pub trait GameDataSource: Send + Sync {
    /// `/chara.json`
    async fn get_characters(&self) -> Result<OrderedMap<CharaEntry>, AppError>;

    /// `/chara/{id}.json`
    async fn get_character(&self, id: u64) -> Result<CharaDetail, AppError>;

    /// `/dress.json`
    async fn get_dresses(&self) -> Result<OrderedMap<DressEntry>, AppError>;

    /// `/dress/{id}.json`
    async fn get_dress(&self, id: u64) -> Result<DressEntry, AppError>;

    /// `/equip.json`
    async fn get_equips(&self) -> Result<OrderedMap<EquipEntry>, AppError>;

    /// `/enemy/{id}.json`
    async fn get_enemy(&self, id: u64) -> Result<EnemyEntry, AppError>;

    /// `/event.json`
    async fn get_events(&self) -> Result<OrderedMap<EventEntry>, AppError>;

    /// `/current.json`
    async fn get_current_events(&self) -> Result<CurrentEvents, AppError>;
}
