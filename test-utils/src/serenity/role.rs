//! Serenity `Role` factories.
//!
//! Roles are built by deserializing JSON shaped like Discord's role objects, which is
//! how Serenity receives them from the gateway.

use serde_json::json;
use serenity::all::Role;

/// Creates a role with no colour, permissions or special flags.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, position: u16) -> Role {
    serde_json::from_value(json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates the `@everyone` role of a guild, which shares the guild's id.
pub fn create_everyone_role(guild_id: u64) -> Role {
    create_test_role(guild_id, "@everyone", 0)
}
