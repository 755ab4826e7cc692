//! Character factory for `/chara.json` and `/chara/{id}.json` payloads.

use entity::chara::{CharaBasicInfo, CharaDetail, CharaEntry, CharaInfo};

use crate::factory::helpers::{next_id, text};

/// Factory for creating test characters.
///
/// The same factory builds both the collection entry and the detail payload, so a test
/// can serve a consistent pair for one character.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::chara::CharaFactory;
///
/// let factory = CharaFactory::new().id(104).name("Claudine Saijo").birthday(1, 8);
/// let entry = factory.clone().build();
/// let detail = factory.build_detail();
/// ```
#[derive(Clone)]
pub struct CharaFactory {
    id: u64,
    en_name: String,
    ja_name: String,
    birth_day: u32,
    birth_month: u32,
    school_id: u32,
    cv: String,
    introduction: String,
    likes: String,
    dislikes: String,
}

impl CharaFactory {
    /// Creates a new CharaFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Chara {id}"` in English, `"キャラ{id}"` in Japanese
    /// - birthday: 1 January
    /// - school: Seisho (1)
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            en_name: format!("Chara {}", id),
            ja_name: format!("キャラ{}", id),
            birth_day: 1,
            birth_month: 1,
            school_id: 1,
            cv: format!("Voice {}", id),
            introduction: format!("Introduction {}", id),
            likes: "Revues".to_string(),
            dislikes: "Losing".to_string(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the English name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.en_name = name.into();
        self
    }

    /// Sets the Japanese name.
    pub fn japanese_name(mut self, name: impl Into<String>) -> Self {
        self.ja_name = name.into();
        self
    }

    /// Sets the birthday. A day of `0` marks a non-playable entry.
    pub fn birthday(mut self, day: u32, month: u32) -> Self {
        self.birth_day = day;
        self.birth_month = month;
        self
    }

    pub fn school_id(mut self, school_id: u32) -> Self {
        self.school_id = school_id;
        self
    }

    pub fn voice_actor(mut self, cv: impl Into<String>) -> Self {
        self.cv = cv.into();
        self
    }

    pub fn likes(mut self, likes: impl Into<String>) -> Self {
        self.likes = likes.into();
        self
    }

    pub fn dislikes(mut self, dislikes: impl Into<String>) -> Self {
        self.dislikes = dislikes.into();
        self
    }

    fn basic_info(&self, with_name: bool) -> CharaBasicInfo {
        CharaBasicInfo {
            chara_id: self.id,
            birth_day: self.birth_day,
            birth_month: self.birth_month,
            school_id: self.school_id,
            name_ruby: with_name.then(|| text(&self.en_name, &self.ja_name)),
        }
    }

    /// Builds the `/chara.json` entry.
    pub fn build(self) -> CharaEntry {
        CharaEntry {
            basic_info: self.basic_info(true),
        }
    }

    /// Builds the `/chara/{id}.json` payload, which carries the name under `info`.
    pub fn build_detail(self) -> CharaDetail {
        CharaDetail {
            basic_info: self.basic_info(false),
            info: CharaInfo {
                cv: text(&self.cv, ""),
                introduction: text(&self.introduction, ""),
                likes: text(&self.likes, ""),
                dislikes: text(&self.dislikes, ""),
                name_ruby: Some(text(&self.en_name, &self.ja_name)),
            },
        }
    }
}

impl Default for CharaFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a `/chara.json` entry with the given name and birthday.
pub fn create_chara(id: u64, name: &str, day: u32, month: u32) -> CharaEntry {
    CharaFactory::new()
        .id(id)
        .name(name)
        .birthday(day, month)
        .build()
}
