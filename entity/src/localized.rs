use serde::{Deserialize, Serialize};

/// Text the upstream API ships in several locales.
///
/// Every locale is optional; missing keys decode to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub ja: String,
    pub en: String,
    pub ko: String,
    pub zh_hant: String,
}

impl LocalizedText {
    /// English text, falling back to Japanese when the English entry is blank.
    pub fn english_or_japanese(&self) -> &str {
        if self.en.trim().is_empty() {
            &self.ja
        } else {
            &self.en
        }
    }
}
