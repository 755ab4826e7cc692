//! Domain models.
//!
//! Upstream payloads and the servers file are decoded into `entity` types, then converted
//! to these models at the repository boundary. Services and the bot layer only see the
//! domain models.

pub mod announcement;
pub mod character;
pub mod discord;
pub mod dress;
pub mod enemy;
pub mod equip;
pub mod event;
pub mod guild_config;
