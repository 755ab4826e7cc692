//! Upstream payload fixtures.
//!
//! Samples of real Karthuria API responses, trimmed to a couple of entries each. They
//! keep fields the bot ignores so decoding is tested against the full shape.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture::payload;
//!
//! let source = FakeGameData::new()
//!     .with("/chara.json", payload::characters())
//!     .with("/chara/104.json", payload::character_detail());
//! ```

pub mod payload;
