//! Kuro Test Utils
//!
//! Provides shared testing utilities for the kuro bot. This crate offers a builder pattern
//! for creating test contexts backed by a temporary directory holding a servers file, and
//! factories and fixtures for the upstream API payloads.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and servers file path
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for server entries and upstream entries
//! - **fixture**: Upstream JSON payloads shaped like real API responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_server_store() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_server(factory::server::ServerEntryFactory::new().server_id(1).build())
//!         .build()?;
//!
//!     let store = ServerConfigStore::open(&test.servers_path).await;
//!     // Exercise the store...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
