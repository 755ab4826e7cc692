//! Chat command replies.
//!
//! Each module matches a command module that can be switched on or off in the settings
//! file. Replies never fail: misses and upstream problems are answered with a message.

pub mod birthday;
pub mod configuration;
pub mod event;
pub mod love;
