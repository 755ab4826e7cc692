//! Character domain model.
//!
//! Characters come from `/chara.json` (basic info only) and `/chara/{id}.json` (basic info
//! plus profile). Entries with a birth day of `0` are not playable characters and never
//! become a `CharacterRecord`.

use std::fmt;

use entity::chara::{CharaBasicInfo, CharaDetail, CharaInfo};

use crate::server::{model::announcement::Rgb, util::date::long_day_month};

/// Embed colour for characters without a signature colour.
pub const NEUTRAL_RGB: Rgb = Rgb(153, 170, 181);

/// Year-agnostic birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    pub day: u32,
    pub month: u32,
}

impl Birthday {
    /// Returns `None` for dates that do not exist, including the `0/0` placeholder.
    pub fn new(day: u32, month: u32) -> Option<Self> {
        long_day_month(day, month).map(|_| Self { day, month })
    }

    /// Long form, e.g. `August 01`.
    pub fn long_form(&self) -> String {
        long_day_month(self.day, self.month).unwrap_or_else(|| self.to_string())
    }
}

/// Renders as `DD/MM`.
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum School {
    Seisho,
    Rinmeikan,
    Frontier,
    Siegfeld,
    Seiran,
}

impl School {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(School::Seisho),
            2 => Some(School::Rinmeikan),
            3 => Some(School::Frontier),
            4 => Some(School::Siegfeld),
            5 => Some(School::Seiran),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            School::Seisho => "Seisho Music Academy 99th Class",
            School::Rinmeikan => "Rinmeikan Girls School",
            School::Frontier => "Frontier School of Arts",
            School::Siegfeld => "Siegfeld Institute of Music",
            School::Seiran => "Seiran General Art Institute",
        }
    }
}

/// Signature colours, keyed by full character name.
const CHARACTER_COLORS: &[(&str, Rgb)] = &[
    ("Karen Aijo", Rgb(251, 84, 87)),
    ("Hikari Kagura", Rgb(98, 145, 233)),
    ("Mahiru Tsuyuzaki", Rgb(97, 191, 153)),
    ("Claudine Saijo", Rgb(254, 153, 82)),
    ("Maya Tendo", Rgb(171, 167, 172)),
    ("Junna Hoshimi", Rgb(141, 188, 219)),
    ("Nana Daiba", Rgb(216, 173, 66)),
    ("Futaba Isurugi", Rgb(140, 103, 170)),
    ("Kaoruko Hanayagi", Rgb(224, 134, 150)),
    ("Tamao Tomoe", Rgb(198, 153, 238)),
    ("Ichie Otonashi", Rgb(246, 181, 230)),
    ("Fumi Yumeoji", Rgb(180, 220, 132)),
    ("Rui Akikaze", Rgb(98, 202, 138)),
    ("Yuyuko Tanaka", Rgb(236, 118, 138)),
    ("Aruru Otsuki", Rgb(218, 188, 72)),
    ("Misora Kano", Rgb(112, 195, 228)),
    ("Lalafin Nonomiya", Rgb(249, 122, 185)),
    ("Tsukasa Ebisu", Rgb(240, 161, 81)),
    ("Shizuha Kocho", Rgb(97, 204, 170)),
    ("Akira Yukishiro", Rgb(186, 191, 218)),
    ("Michiru Otori", Rgb(255, 188, 71)),
    ("MeiFan Liu", Rgb(236, 138, 243)),
    ("Shiori Yumeoji", Rgb(112, 217, 219)),
    ("Yachiyo Tsuruhime", Rgb(233, 99, 161)),
    ("Koharu Yanagi", Rgb(212, 49, 78)),
    ("Suzu Minase", Rgb(34, 151, 115)),
    ("Hisame Honami", Rgb(221, 211, 97)),
];

/// Character colour lookup by full name, ignoring case.
pub struct CharacterColor;

impl CharacterColor {
    pub fn for_name(name: &str) -> Rgb {
        CHARACTER_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
            .map(|(_, rgb)| *rgb)
            .unwrap_or(NEUTRAL_RGB)
    }
}

/// Profile fields only present on `/chara/{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub description: String,
    pub voice_actor: String,
    pub likes: String,
    pub dislikes: String,
}

impl CharacterDetail {
    fn from_entity(info: &CharaInfo) -> Self {
        Self {
            description: info.introduction.en.clone(),
            voice_actor: info.cv.en.clone(),
            likes: info.likes.en.clone(),
            dislikes: info.dislikes.en.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub birthday: Birthday,
    pub school: Option<School>,
    pub color: Rgb,
    pub portrait_url: String,
    pub detail: Option<CharacterDetail>,
}

impl CharacterRecord {
    /// Converts a `/chara.json` entry to the character domain model
    ///
    /// # Arguments
    /// - `entity` - Basic info of one character
    /// - `cdn_url` - CDN base URL used to build the portrait URL
    ///
    /// # Returns
    /// - `Some(CharacterRecord)` - A playable character
    /// - `None` - Non-playable entry (birth day `0`) or an impossible birthday
    pub fn from_entity(entity: CharaBasicInfo, cdn_url: &str) -> Option<Self> {
        let name = entity
            .name_ruby
            .as_ref()
            .map(|name| name.english_or_japanese().to_string())
            .unwrap_or_default();

        Self::build(entity, name, cdn_url)
    }

    /// Converts a `/chara/{id}.json` payload, including its profile.
    ///
    /// The detail endpoint carries the name in `info.name_ruby` instead of `basicInfo`.
    pub fn from_detail(entity: CharaDetail, cdn_url: &str) -> Option<Self> {
        let name = entity
            .basic_info
            .name_ruby
            .as_ref()
            .or(entity.info.name_ruby.as_ref())
            .map(|name| name.english_or_japanese().to_string())
            .unwrap_or_default();
        let detail = CharacterDetail::from_entity(&entity.info);

        let mut record = Self::build(entity.basic_info, name, cdn_url)?;
        record.detail = Some(detail);
        Some(record)
    }

    /// Embed fields describing the character as `(name, value, inline)`.
    ///
    /// School first, then the profile when hydrated. Blank profile values are left out
    /// since Discord rejects empty field values.
    pub fn profile_fields(&self) -> Vec<(&'static str, String, bool)> {
        let mut fields = Vec::new();

        if let Some(school) = self.school {
            fields.push(("School", school.description().to_string(), true));
        }

        if let Some(detail) = &self.detail {
            for (name, value, inline) in [
                ("Voice actor", &detail.voice_actor, true),
                ("Likes", &detail.likes, false),
                ("Dislikes", &detail.dislikes, false),
                ("About", &detail.description, false),
            ] {
                if !value.trim().is_empty() {
                    fields.push((name, value.clone(), inline));
                }
            }
        }

        fields
    }

    fn build(entity: CharaBasicInfo, name: String, cdn_url: &str) -> Option<Self> {
        if entity.birth_day == 0 {
            return None;
        }
        let birthday = Birthday::new(entity.birth_day, entity.birth_month)?;

        Some(Self {
            id: entity.chara_id,
            color: CharacterColor::for_name(&name),
            name,
            birthday,
            school: School::from_id(entity.school_id),
            portrait_url: portrait_url(cdn_url, entity.chara_id),
            detail: None,
        })
    }
}

pub fn portrait_url(cdn_url: &str, chara_id: u64) -> String {
    format!(
        "{}/dlc/res/ui/images/archive/archive_chara/select/chara_portrait_{}.png",
        cdn_url, chara_id
    )
}
