//! Wire-level shapes for everything Kuro reads or writes as JSON.
//!
//! Two families of types live here:
//! - `server` - the on-disk server configuration file, including the legacy empty-string
//!   sentinel used for an unconfigured channel
//! - `chara`, `dress`, `equip`, `enemy`, `event` - the subset of the Karthuria API payloads
//!   the bot actually reads
//!
//! These types carry no behaviour beyond (de)serialization. The bot converts them into
//! domain models at the repository boundary.

pub mod chara;
pub mod dress;
pub mod enemy;
pub mod equip;
pub mod event;
pub mod localized;
pub mod ordered;
pub mod server;

pub mod prelude {
    pub use crate::chara::{CharaBasicInfo, CharaDetail, CharaEntry, CharaInfo};
    pub use crate::dress::{DressBasicInfo, DressEntry};
    pub use crate::enemy::{EnemyBasicInfo, EnemyEntry};
    pub use crate::equip::{Charas, EquipBasicInfo, EquipEntry};
    pub use crate::event::{CurrentEvent, CurrentEvents, EventEntry, Rogue, Titan, TitanEnemy};
    pub use crate::localized::LocalizedText;
    pub use crate::ordered::OrderedMap;
    pub use crate::server::{ChannelEntry, ServerEntry};
}
