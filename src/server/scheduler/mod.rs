//! Timed jobs.

pub mod reminders;
