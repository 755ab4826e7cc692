//! The kuro bot.
//!
//! The bot follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers, command parsing, and message building
//! - **Service Layer** (`service/`) - Command replies and the reminder tick
//! - **Data Layer** (`data/`) - Read-through caches over the upstream API and the servers
//!   file store
//! - **Model Layer** (`model/`) - Domain models converted from the `entity` wire types
//! - **Upstream** (`upstream/`) - Karthuria API client behind the `GameDataSource` trait
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Settings file and environment
//! - **State** (`state`) - Shared repositories and settings
//! - **Startup** (`startup`) - HTTP client and repository initialization
//! - **Scheduler** (`scheduler/`) - The reminder job
//!
//! # Message Flow
//!
//! 1. **Handler** receives a gateway message and parses it into a `Command`
//! 2. **Service** looks data up through the repositories and builds a `Reply`
//! 3. **Data** answers from its cache or fetches from the upstream API
//! 4. **Handler** converts the `Reply` to a Serenity message and posts it

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod upstream;
pub mod util;
