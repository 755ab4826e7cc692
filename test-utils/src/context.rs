use std::path::PathBuf;

use entity::server::ServerEntry;
use tempfile::TempDir;

use crate::error::TestError;

/// Name of the servers file inside the test directory.
pub const SERVERS_FILE: &str = "servers.json";

/// Test context owning a temporary directory for file-backed stores.
///
/// The directory and everything in it is removed when the context is dropped, so keep
/// the context alive for the duration of the test.
pub struct TestContext {
    dir: TempDir,

    /// Path of the servers file. The file only exists if the builder wrote it or the code
    /// under test created it.
    pub servers_path: PathBuf,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no files written
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let servers_path = dir.path().join(SERVERS_FILE);

        Ok(Self { dir, servers_path })
    }

    /// Path of another file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `entries` as the servers file, replacing any existing file.
    pub fn write_servers(&self, entries: &[ServerEntry]) -> Result<(), TestError> {
        let contents = serde_json::to_string(entries)?;
        self.write_raw_servers(&contents)
    }

    /// Writes `contents` verbatim as the servers file.
    pub fn write_raw_servers(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(&self.servers_path, contents)?;
        Ok(())
    }

    /// Reads and decodes the servers file.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerEntry>)` - Decoded entries
    /// - `Err(TestError::Io)` - The file is missing or unreadable
    /// - `Err(TestError::Json)` - The file is not a valid servers file
    pub fn read_servers(&self) -> Result<Vec<ServerEntry>, TestError> {
        let contents = self.read_raw_servers()?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads the servers file as text.
    pub fn read_raw_servers(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.servers_path)?)
    }

    /// Reads the servers file as untyped JSON, for asserting on the exact encoding.
    pub fn read_servers_json(&self) -> Result<serde_json::Value, TestError> {
        let contents = self.read_raw_servers()?;
        Ok(serde_json::from_str(&contents)?)
    }
}
