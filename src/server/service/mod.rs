//! Service layer between the bot and the repositories.
//!
//! Services take the repositories they need by reference, apply the reply and
//! announcement rules, and return plain domain values (`Reply`, `Announcement`, counts)
//! that the bot layer turns into Discord messages.
//!
//! - **command** - One service per chat command module
//! - **event** - Name and rarity resolution for the current-events snapshot
//! - **reminder** - The body of one reminder scheduler tick

pub mod command;
pub mod event;
pub mod reminder;
