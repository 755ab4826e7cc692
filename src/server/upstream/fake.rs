//! In-memory `GameDataSource` for tests.
//!
//! Serves JSON payloads registered by path and counts requests per path. Paths without a
//! payload fail with `AppError::NotFound`, which stands in for an upstream error status.

use std::collections::HashMap;
use std::sync::Mutex;

use entity::prelude::{
    CharaDetail, CharaEntry, CurrentEvents, DressEntry, EnemyEntry, EquipEntry, EventEntry,
    OrderedMap,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serenity::async_trait;

use crate::server::{
    error::AppError,
    upstream::{path, GameDataSource},
};

#[derive(Default)]
pub struct FakeGameData {
    payloads: Mutex<HashMap<String, Value>>,
    requests: Mutex<HashMap<String, usize>>,
}

impl FakeGameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `payload` for `path` from now on.
    pub fn with(self, path: impl Into<String>, payload: Value) -> Self {
        self.set(path, payload);
        self
    }

    pub fn set(&self, path: impl Into<String>, payload: Value) {
        self.payloads.lock().unwrap().insert(path.into(), payload);
    }

    /// Makes `path` fail from now on.
    pub fn remove(&self, path: &str) {
        self.payloads.lock().unwrap().remove(path);
    }

    /// Number of requests made for `path`, successful or not.
    pub fn requests(&self, path: &str) -> usize {
        self.requests.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    fn serve<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        *self
            .requests
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;

        let payload = self
            .payloads
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No payload for {}", path)))?;

        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl GameDataSource for FakeGameData {
    async fn get_characters(&self) -> Result<OrderedMap<CharaEntry>, AppError> {
        self.serve(path::CHARACTERS)
    }

    async fn get_character(&self, id: u64) -> Result<CharaDetail, AppError> {
        self.serve(&path::character(id))
    }

    async fn get_dresses(&self) -> Result<OrderedMap<DressEntry>, AppError> {
        self.serve(path::DRESSES)
    }

    async fn get_dress(&self, id: u64) -> Result<DressEntry, AppError> {
        self.serve(&path::dress(id))
    }

    async fn get_equips(&self) -> Result<OrderedMap<EquipEntry>, AppError> {
        self.serve(path::EQUIPS)
    }

    async fn get_enemy(&self, id: u64) -> Result<EnemyEntry, AppError> {
        self.serve(&path::enemy(id))
    }

    async fn get_events(&self) -> Result<OrderedMap<EventEntry>, AppError> {
        self.serve(path::EVENTS)
    }

    async fn get_current_events(&self) -> Result<CurrentEvents, AppError> {
        self.serve(path::CURRENT_EVENTS)
    }
}
