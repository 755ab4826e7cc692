use entity::prelude::{
    CharaDetail, CharaEntry, CurrentEvents, DressEntry, EnemyEntry, EquipEntry, EventEntry,
    OrderedMap,
};
use serde::de::DeserializeOwned;
use serenity::async_trait;

use crate::server::{
    error::AppError,
    upstream::{path, GameDataSource},
};

/// HTTP client for the Karthuria API.
///
/// Requests are plain GETs with no retry and no timeout beyond reqwest's defaults.
/// Non-2xx responses are turned into errors with `error_for_status`.
#[derive(Debug, Clone)]
pub struct KarthuriaClient {
    http: reqwest::Client,
    base_url: String,
}

impl KarthuriaClient {
    /// Creates a new client for the API at `base_url`
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `base_url` - API base URL, e.g. `https://karth.top/api`
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches and decodes one endpoint.
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded response body
    /// - `Err(AppError::ReqwestErr)` - Transport failure, non-2xx status, or a body that
    ///   does not decode as `T`
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(body)
    }
}

#[async_trait]
impl GameDataSource for KarthuriaClient {
    async fn get_characters(&self) -> Result<OrderedMap<CharaEntry>, AppError> {
        self.get_json(path::CHARACTERS).await
    }

    async fn get_character(&self, id: u64) -> Result<CharaDetail, AppError> {
        self.get_json(&path::character(id)).await
    }

    async fn get_dresses(&self) -> Result<OrderedMap<DressEntry>, AppError> {
        self.get_json(path::DRESSES).await
    }

    async fn get_dress(&self, id: u64) -> Result<DressEntry, AppError> {
        self.get_json(&path::dress(id)).await
    }

    async fn get_equips(&self) -> Result<OrderedMap<EquipEntry>, AppError> {
        self.get_json(path::EQUIPS).await
    }

    async fn get_enemy(&self, id: u64) -> Result<EnemyEntry, AppError> {
        self.get_json(&path::enemy(id)).await
    }

    async fn get_events(&self) -> Result<OrderedMap<EventEntry>, AppError> {
        self.get_json(path::EVENTS).await
    }

    async fn get_current_events(&self) -> Result<CurrentEvents, AppError> {
        self.get_json(path::CURRENT_EVENTS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let client = KarthuriaClient::new(reqwest::Client::new(), "https://karth.top/api/");

        assert_eq!(client.base_url, "https://karth.top/api");
    }
}
