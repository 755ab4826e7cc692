//! Dress factory for `/dress.json` and `/dress/{id}.json` payloads.

use entity::dress::{DressBasicInfo, DressEntry};

use crate::factory::helpers::{next_id, text};

/// Factory for creating test dresses.
pub struct DressEntryFactory {
    id: u64,
    rarity: u8,
    character: u64,
    name: String,
}

impl DressEntryFactory {
    /// Creates a new DressEntryFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - rarity: 4
    /// - character: 101
    /// - name: `"Dress {id}"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            rarity: 4,
            character: 101,
            name: format!("Dress {}", id),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn rarity(mut self, rarity: u8) -> Self {
        self.rarity = rarity;
        self
    }

    /// Sets the owning character ID.
    pub fn character(mut self, character: u64) -> Self {
        self.character = character;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> DressEntry {
        DressEntry {
            basic_info: DressBasicInfo {
                card_id: self.id.to_string(),
                rarity: self.rarity,
                character: self.character,
                name: text(&self.name, ""),
            },
        }
    }
}

impl Default for DressEntryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a dress owned by `character`.
pub fn create_dress(id: u64, character: u64) -> DressEntry {
    DressEntryFactory::new().id(id).character(character).build()
}
