use entity::server::ServerEntry;

use crate::{context::TestContext, error::TestError};

/// What the servers file should contain when the context is built.
enum ServersFile {
    Missing,
    Entries(Vec<ServerEntry>),
    Raw(String),
}

/// Builder for creating test contexts with a prepared servers file.
///
/// Provides a fluent interface for configuring test environments. By default no servers
/// file is written, which is how a fresh deployment looks. Add server entries or raw file
/// contents, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_raw_servers_file("not json")
///     .build()?;
/// ```
pub struct TestBuilder {
    servers: ServersFile,
}

impl TestBuilder {
    /// Creates a new test builder that leaves the servers file absent.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            servers: ServersFile::Missing,
        }
    }

    /// Adds a server entry to the servers file.
    ///
    /// Chain multiple calls to add multiple entries; they are written in the order added.
    /// Replaces any raw contents set earlier.
    ///
    /// # Arguments
    /// - `entry` - Server entry to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_server(mut self, entry: ServerEntry) -> Self {
        match &mut self.servers {
            ServersFile::Entries(entries) => entries.push(entry),
            _ => self.servers = ServersFile::Entries(vec![entry]),
        }
        self
    }

    /// Writes an empty servers file (`[]`) when no entries are added.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_empty_servers_file(mut self) -> Self {
        if !matches!(self.servers, ServersFile::Entries(_)) {
            self.servers = ServersFile::Entries(Vec::new());
        }
        self
    }

    /// Writes `contents` verbatim as the servers file.
    ///
    /// Use this for legacy or corrupt files that the entity types would not produce.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_servers_file(mut self, contents: impl Into<String>) -> Self {
        self.servers = ServersFile::Raw(contents.into());
        self
    }

    /// Builds the test context.
    ///
    /// Creates a fresh temporary directory and writes the servers file if one was
    /// configured.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    /// - `Err(TestError::Json)` - Failed to encode the server entries
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.servers {
            ServersFile::Missing => {}
            ServersFile::Entries(entries) => context.write_servers(&entries)?,
            ServersFile::Raw(contents) => context.write_raw_servers(&contents)?,
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
