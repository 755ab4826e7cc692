//! Server entry factory for creating test servers file contents.

use entity::server::{ChannelEntry, ServerEntry};

use crate::factory::helpers::next_id;

/// Factory for creating test server entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::{ChannelEntryFactory, ServerEntryFactory};
///
/// let server = ServerEntryFactory::new()
///     .server_id(123456789)
///     .name("Revue Stage")
///     .birthday_channel(ChannelEntryFactory::new().channel_id(1).build())
///     .build();
/// ```
pub struct ServerEntryFactory {
    server_id: u64,
    name: String,
    birthday_channel: Option<ChannelEntry>,
    event_channel: Option<ChannelEntry>,
}

impl ServerEntryFactory {
    /// Creates a new ServerEntryFactory with default values.
    ///
    /// Defaults:
    /// - server_id: auto-incremented
    /// - name: `"Server {id}"`
    /// - birthday_channel: unset
    /// - event_channel: unset
    pub fn new() -> Self {
        let id = next_id();
        Self {
            server_id: id,
            name: format!("Server {}", id),
            birthday_channel: None,
            event_channel: None,
        }
    }

    /// Sets the Discord guild ID.
    pub fn server_id(mut self, server_id: u64) -> Self {
        self.server_id = server_id;
        self
    }

    /// Sets the guild name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the birthday announcement channel.
    pub fn birthday_channel(mut self, channel: ChannelEntry) -> Self {
        self.birthday_channel = Some(channel);
        self
    }

    /// Sets the event announcement channel.
    pub fn event_channel(mut self, channel: ChannelEntry) -> Self {
        self.event_channel = Some(channel);
        self
    }

    /// Builds the server entry.
    pub fn build(self) -> ServerEntry {
        ServerEntry {
            server_id: self.server_id,
            name: self.name,
            birthday_channel: self.birthday_channel,
            event_channel: self.event_channel,
        }
    }
}

impl Default for ServerEntryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for creating channel bindings.
pub struct ChannelEntryFactory {
    channel_id: u64,
    name: String,
    announcement_rol: u64,
}

impl ChannelEntryFactory {
    /// Creates a new ChannelEntryFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented
    /// - name: `"channel-{id}"`
    /// - announcement_rol: auto-incremented
    pub fn new() -> Self {
        let id = next_id();
        Self {
            channel_id: id,
            name: format!("channel-{}", id),
            announcement_rol: next_id(),
        }
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role mentioned in announcements.
    pub fn role_id(mut self, role_id: u64) -> Self {
        self.announcement_rol = role_id;
        self
    }

    pub fn build(self) -> ChannelEntry {
        ChannelEntry {
            channel_id: self.channel_id,
            name: self.name,
            announcement_rol: self.announcement_rol,
        }
    }
}

impl Default for ChannelEntryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a server entry with no channels configured.
///
/// # Arguments
/// - `server_id` - Discord guild ID
/// - `name` - Guild name
///
/// # Returns
/// - `ServerEntry` - Entry with both channels unset
pub fn create_server(server_id: u64, name: &str) -> ServerEntry {
    ServerEntryFactory::new()
        .server_id(server_id)
        .name(name)
        .build()
}
