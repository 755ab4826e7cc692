//! Memoir factory for `/equip.json` payloads.

use entity::equip::{Charas, EquipBasicInfo, EquipEntry};

use crate::factory::helpers::{next_id, text};

/// Factory for creating test memoirs.
pub struct EquipEntryFactory {
    id: u64,
    rarity: u8,
    charas: Charas,
    name: String,
}

impl EquipEntryFactory {
    /// Creates a new EquipEntryFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - rarity: 4
    /// - charas: none
    /// - name: `"Memoir {id}"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            rarity: 4,
            charas: Charas::Ids(Vec::new()),
            name: format!("Memoir {}", id),
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

    /// Sets the characters pictured on the memoir.
    pub fn charas(mut self, ids: &[u64]) -> Self {
        self.charas = Charas::Ids(ids.to_vec());
        self
    }

    /// Marks the memoir as generic, the way upstream does with the `"None"` literal.
    pub fn unowned(mut self) -> Self {
        self.charas = Charas::Literal("None".to_string());
        self
    }

    pub fn build(self) -> EquipEntry {
        EquipEntry {
            basic_info: EquipBasicInfo {
                card_id: self.id.to_string(),
                rarity: self.rarity,
                charas: self.charas,
                name: text(&self.name, ""),
            },
        }
    }
}

impl Default for EquipEntryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a memoir picturing the given characters.
pub fn create_equip(id: u64, charas: &[u64]) -> EquipEntry {
    EquipEntryFactory::new().id(id).charas(charas).build()
}
