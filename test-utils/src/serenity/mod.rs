//! Factories for Serenity gateway types used by the bot's handlers.

pub mod role;

pub use role::{create_everyone_role, create_test_role};
