//! In-memory repositories and the server configuration store.
//!
//! Repositories are read-through caches over the Karthuria API, accessed through the
//! `GameDataSource` trait. They convert wire types into domain models at this boundary
//! and degrade upstream failures to empty results, logging the error. Lazy caches only
//! remember successful loads.
//!
//! `ServerConfigStore` is the only writer of the servers file. It keeps the whole file in
//! memory and rewrites it on every change.
//!
//! Every cache sits behind a `tokio::sync::RwLock` and no lock is held across a network
//! call.

pub mod character;
pub mod dress;
pub mod enemy;
pub mod equip;
pub mod event;
pub mod server_config;

#[cfg(test)]
mod test;
