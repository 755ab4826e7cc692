//! Factory methods for creating test data.
//!
//! Each factory builds one wire type from the `entity` crate with sensible defaults,
//! reducing boilerplate in tests. Server entries are written to a servers file through
//! `TestBuilder`; upstream entries are turned into JSON payloads with
//! `helpers::collection` and served by the bot's in-memory data source.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let server = factory::create_server(1, "Test Server");
//! let chara = factory::create_chara(104, "Claudine Saijo", 1, 8);
//!
//! // Build a /chara.json payload
//! let payload = factory::helpers::collection([(104, chara)]);
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let dress = factory::dress::DressEntryFactory::new()
//!     .id(1040001)
//!     .character(104)
//!     .rarity(4)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `server` - Create server entries and channel bindings
//! - `chara` - Create character entries and details
//! - `dress` - Create dress entries
//! - `equip` - Create memoir entries
//! - `enemy` - Create enemy entries
//! - `event` - Create event names and `/current.json` snapshots
//! - `helpers` - Id generation and payload helpers

pub mod chara;
pub mod dress;
pub mod enemy;
pub mod equip;
pub mod event;
pub mod helpers;
pub mod server;

pub use chara::create_chara;
pub use dress::create_dress;
pub use equip::create_equip;
pub use server::create_server;
