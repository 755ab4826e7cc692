//! `i_love_you`
//!
//! Claudine rarely says it back. Most of the time the author gets a random picture of
//! one of her dresses or memoirs instead.

use rand::{seq::IndexedRandom, Rng};

use crate::server::{
    data::{dress::DressRepository, equip::EquipRepository},
    model::announcement::{MessageEmbed, Reply, Rgb},
};

/// Claudine Saijo's character id.
pub const CLAUDINE_ID: u64 = 104;

pub const LOVE_RGB: Rgb = Rgb(255, 141, 141);
pub const NO_LOVE_RGB: Rgb = Rgb(0, 150, 218);

/// Relative odds of a love reply, a dress picture, and a memoir picture.
pub const OUTCOME_WEIGHTS: [u32; 3] = [1, 50, 80];

const LOVE_IMAGE: &str = "dlc/res/equip/cg/4000160/image.png";
const LOVE_THUMBNAIL: &str = "ww/res_en/res/item_root/medium/32_10413.png";
const NO_LOVE_THUMBNAIL: &str = "ww/res_en/res/item_root/medium/32_10412.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoveOutcome {
    Love,
    Dress,
    Equip,
}

impl LoveOutcome {
    const ALL: [LoveOutcome; 3] = [LoveOutcome::Love, LoveOutcome::Dress, LoveOutcome::Equip];

    /// Sum of `OUTCOME_WEIGHTS`; rolls are drawn from `0..TOTAL_WEIGHT`.
    pub const TOTAL_WEIGHT: u32 = OUTCOME_WEIGHTS[0] + OUTCOME_WEIGHTS[1] + OUTCOME_WEIGHTS[2];

    /// Maps a roll in `0..TOTAL_WEIGHT` to an outcome.
    pub fn from_roll(roll: u32) -> Self {
        let mut remaining = roll;
        for (outcome, weight) in Self::ALL.into_iter().zip(OUTCOME_WEIGHTS) {
            if remaining < weight {
                return outcome;
            }
            remaining -= weight;
        }
        LoveOutcome::Equip
    }

    pub fn random() -> Self {
        Self::from_roll(rand::rng().random_range(0..Self::TOTAL_WEIGHT))
    }
}

pub struct LoveCommand<'a> {
    dresses: &'a DressRepository,
    equips: &'a EquipRepository,
    cdn_url: &'a str,
}

impl<'a> LoveCommand<'a> {
    /// Creates a new LoveCommand instance.
    ///
    /// # Arguments
    /// - `dresses` - Source of Claudine's dress pictures
    /// - `equips` - Source of Claudine's memoir pictures
    /// - `cdn_url` - CDN base URL without a trailing slash
    pub fn new(
        dresses: &'a DressRepository,
        equips: &'a EquipRepository,
        cdn_url: &'a str,
    ) -> Self {
        Self {
            dresses,
            equips,
            cdn_url,
        }
    }

    pub async fn i_love_you(&self, author_mention: &str) -> Reply {
        self.reply_for(LoveOutcome::random(), author_mention).await
    }

    /// Builds the reply for a given outcome.
    ///
    /// When Claudine has no pictures of the drawn kind, the love picture is used.
    pub async fn reply_for(&self, outcome: LoveOutcome, author_mention: &str) -> Reply {
        let image = match outcome {
            LoveOutcome::Love => return self.love_reply(author_mention),
            LoveOutcome::Dress => {
                let dresses = self.dresses.get_dresses_by_character_id(CLAUDINE_ID).await;
                pick(&dresses).map(|dress| dress.image_url(self.cdn_url))
            }
            LoveOutcome::Equip => {
                let equips = self.equips.get_equips_by_character_id(CLAUDINE_ID).await;
                pick(&equips).map(|equip| equip.image_url(self.cdn_url))
            }
        };

        Reply::embed(
            MessageEmbed::new(
                "No Love",
                "Je suis désolé, but I don't. Here have a nice picture of me as consolation.",
                NO_LOVE_RGB,
            )
            .image(image.unwrap_or_else(|| self.asset(LOVE_IMAGE)))
            .thumbnail(self.asset(NO_LOVE_THUMBNAIL)),
        )
    }

    fn love_reply(&self, author_mention: &str) -> Reply {
        Reply::embed(
            MessageEmbed::new("Love", format!("Je t'aime {}", author_mention), LOVE_RGB)
                .image(self.asset(LOVE_IMAGE))
                .thumbnail(self.asset(LOVE_THUMBNAIL)),
        )
        .with_content(author_mention)
    }

    fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.cdn_url, path)
    }
}

// Kept out of the async fns: `ThreadRng` is not `Send`.
fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}
